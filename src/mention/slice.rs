//! Extracting a char range from a part sequence.

use crate::util::char_slice;

use super::part::Part;

/// Parts covering plain-text range `cursor..cursor + count`.
///
/// ```text
/// | part1 |   part2   |  part3  |
///  a b c|d e f g h i j k l|m n o
/// ```
///
/// Yields a sub-part holding `d`, `part2` unchanged, and a sub-part holding
/// `kl`. Boundary parts covered only partially become plain parts holding
/// the covered substring, so a token cut by the range loses its data. Parts
/// keep their positions in the source sequence.
///
/// Returns an empty sequence when the range does not fall inside `parts`.
pub fn parts_interval(parts: &[Part], cursor: usize, count: usize) -> Vec<Part> {
    if count == 0 {
        return Vec::new();
    }
    let end = cursor + count;

    let first_idx = parts
        .iter()
        .position(|p| p.position.start <= cursor && cursor < p.position.end);
    let last_idx = parts
        .iter()
        .position(|p| p.position.start < end && end <= p.position.end);
    let (Some(first_idx), Some(last_idx)) = (first_idx, last_idx) else {
        return Vec::new();
    };
    if last_idx < first_idx {
        return Vec::new();
    }

    let mut interval = Vec::with_capacity(last_idx - first_idx + 1);

    let first = &parts[first_idx];
    if first.position.start == cursor && first.position.end <= end {
        interval.push(first.clone());
    } else {
        let local = cursor - first.position.start;
        let text = char_slice(&first.text, local, local + count);
        interval.push(Part::plain(text, cursor));
    }

    if last_idx > first_idx {
        interval.extend(parts[first_idx + 1..last_idx].iter().cloned());

        let last = &parts[last_idx];
        if last.position.end == end && last.position.start >= cursor {
            interval.push(last.clone());
        } else {
            let text = char_slice(&last.text, 0, end - last.position.start);
            interval.push(Part::plain(text, last.position.start));
        }
    }

    interval
}
