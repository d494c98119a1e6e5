//! Largest linked socket group.

use crate::splitter::ItemText;

/// Prefix of the sockets line.
pub const SOCKETS_MARKER: &str = "Sockets:";
/// Separates two unlinked socket groups.
const GROUP_SEPARATOR: char = ' ';
/// Links two sockets inside one group.
const LINK: char = '-';

/// Link count of the largest socket group, when it is 5 or 6.
///
/// Items without a sockets line, or whose largest group is four or fewer,
/// yield `None`: those counts do not move prices.
pub fn count_links(text: &ItemText) -> Option<u8> {
    let sockets = text.line_with_prefix(SOCKETS_MARKER)?;
    let largest = largest_link_group(sockets[SOCKETS_MARKER.len()..].trim());
    (largest > 4).then_some(largest)
}

/// Size of the largest group in a socket string such as `B-R-R G-B`.
///
/// Sockets come as letter/separator pairs; a space opens the next group and
/// every socket letter grows the current one.
pub fn largest_link_group(sockets: &str) -> u8 {
    let mut group = 0usize;
    let mut sizes: Vec<u8> = vec![0];

    for c in sockets.chars() {
        match c {
            GROUP_SEPARATOR => {
                group += 1;
                sizes.push(0);
            }
            LINK => {}
            _ => sizes[group] = sizes[group].saturating_add(1),
        }
    }

    sizes.into_iter().max().unwrap_or(0)
}
