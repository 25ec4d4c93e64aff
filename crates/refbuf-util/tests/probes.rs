// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

#[cfg(test)]
mod probe_tests {
    use refbuf_util::{constant_time_eq, hex_to_bytes, is_slice_zeroized};

    #[test]
    fn test_is_slice_zeroized() {
        assert!(is_slice_zeroized(&[]));
        assert!(is_slice_zeroized(&[0u8; 17]));
        assert!(!is_slice_zeroized(&[0, 0, 0, 1]));
    }

    #[test]
    fn test_constant_time_eq() {
        assert!(constant_time_eq(b"", b""));
        assert!(constant_time_eq(b"refbuf", b"refbuf"));
        assert!(!constant_time_eq(b"refbuf", b"refbug"));
        assert!(!constant_time_eq(b"ref", b"refbuf"));
    }

    #[test]
    fn test_hex_to_bytes() {
        assert_eq!(hex_to_bytes("deadbeef"), vec![0xde, 0xad, 0xbe, 0xef]);
        assert_eq!(hex_to_bytes("ABCDEF"), vec![0xab, 0xcd, 0xef]);
        assert_eq!(hex_to_bytes(""), Vec::<u8>::new());
    }

    #[test]
    #[should_panic]
    fn test_hex_to_bytes_odd_length_panics() {
        let _ = hex_to_bytes("abc");
    }
}
