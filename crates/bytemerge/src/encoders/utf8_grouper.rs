//! # UTF-8 Safe Fragment Grouping

/// Regroup merge fragments into runs which are valid UTF-8.
///
/// Fragments are accumulated left to right; whenever the accumulated bytes
/// form valid UTF-8 they are emitted with the number of fragments consumed.
/// A trailing run which never becomes valid is emitted lossily.
///
/// ## Arguments
/// * `fragments` - The ordered merge fragments of one piece.
///
/// ## Returns
/// The ``(text, fragment count)`` groups; the counts sum to `fragments.len()`.
pub fn group_utf8_safe<S: AsRef<[u8]>>(fragments: &[S]) -> Vec<(String, usize)> {
    let mut groups = Vec::new();
    let mut buf: Vec<u8> = Vec::new();
    let mut count = 0;

    for frag in fragments {
        buf.extend_from_slice(frag.as_ref());
        count += 1;

        if let Ok(text) = core::str::from_utf8(&buf) {
            groups.push((text.to_string(), count));
            buf.clear();
            count = 0;
        }
    }

    if count > 0 {
        groups.push((String::from_utf8_lossy(&buf).into_owned(), count));
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_fragments() {
        let frags: Vec<&[u8]> = vec![b"hello", b" ", b"world"];
        assert_eq!(
            group_utf8_safe(&frags),
            vec![
                ("hello".to_string(), 1),
                (" ".to_string(), 1),
                ("world".to_string(), 1)
            ]
        );

        assert!(group_utf8_safe::<&[u8]>(&[]).is_empty());
    }

    #[test]
    fn test_split_codepoint() {
        // "é" is [0xc3, 0xa9]; "🦀" is [0xf0, 0x9f, 0xa6, 0x80].
        let frags: Vec<&[u8]> = vec![b"a", &[0xc3], &[0xa9], &[0xf0, 0x9f], &[0xa6], &[0x80, b'!']];

        let groups = group_utf8_safe(&frags);
        assert_eq!(
            groups,
            vec![
                ("a".to_string(), 1),
                ("é".to_string(), 2),
                ("🦀!".to_string(), 3),
            ]
        );

        let total: usize = groups.iter().map(|(_, c)| c).sum();
        assert_eq!(total, frags.len());
    }

    #[test]
    fn test_invalid_tail() {
        let frags: Vec<&[u8]> = vec![b"ok", &[0xe2], &[0x82]];
        let groups = group_utf8_safe(&frags);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0], ("ok".to_string(), 1));
        assert_eq!(groups[1].1, 2);
        assert_eq!(groups[1].0, "\u{fffd}");
    }
}
