//! Protocol constants for txf.

// =============================================================================
// Wire Format Constants
// =============================================================================

/// Header magic announcing a file offer ("SEND").
pub const MAGIC_SEND: u32 = 0x5345_4E44;

/// Header magic acknowledging successful receipt ("rcvd").
pub const MAGIC_RCVD: u32 = 0x7263_7664;

/// Total length of the wire header in bytes.
pub const HEADER_LEN: usize = 32;

/// Length of the file name field in the wire header.
pub const FILENAME_LEN: usize = 20;

/// Maximum transferable file size in bytes (signed 32-bit max).
pub const MAX_FILE_SIZE: u32 = 0x7FFF_FFFF;

// =============================================================================
// Transfer Constants
// =============================================================================

/// Chunk size for file payload, bytes per read/write cycle.
pub const BLOCK_SIZE: usize = 1024;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn magics_spell_their_tags() {
        assert_eq!(&MAGIC_SEND.to_be_bytes(), b"SEND");
        assert_eq!(&MAGIC_RCVD.to_be_bytes(), b"rcvd");
    }

    #[test]
    fn header_accounts_for_every_byte() {
        // magic + size + name + terminator reservation + padding
        assert_eq!(HEADER_LEN, 4 + 4 + FILENAME_LEN + 1 + 3);
    }

    #[test]
    fn max_file_size_is_signed_32bit_max() {
        assert_eq!(MAX_FILE_SIZE, i32::MAX as u32);
    }
}
