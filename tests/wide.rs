#![recursion_limit = "512"]

use pretty_assertions::assert_eq;
use tvariant::{Variant, Visitor, apply};

type Wide = Variant![
    [u8; 0], [u8; 1], [u8; 2], [u8; 3], [u8; 4], [u8; 5], [u8; 6], [u8; 7],
    [u8; 8], [u8; 9], [u8; 10], [u8; 11], [u8; 12], [u8; 13], [u8; 14], [u8; 15],
    [u8; 16], [u8; 17], [u8; 18], [u8; 19], [u8; 20], [u8; 21], [u8; 22],
    [u8; 23], [u8; 24], [u8; 25], [u8; 26], [u8; 27], [u8; 28], [u8; 29],
    [u8; 30], [u8; 31], [u8; 32], [u8; 33], [u8; 34], [u8; 35], [u8; 36],
    [u8; 37], [u8; 38], [u8; 39], [u8; 40], [u8; 41], [u8; 42], [u8; 43],
    [u8; 44], [u8; 45], [u8; 46], [u8; 47], [u8; 48], [u8; 49], [u8; 50],
    [u8; 51], [u8; 52], [u8; 53], [u8; 54], [u8; 55], [u8; 56], [u8; 57],
    [u8; 58], [u8; 59], [u8; 60], [u8; 61], [u8; 62], [u8; 63],
];

struct Len;

impl<const N: usize> Visitor<(&[u8; N],)> for Len {
    type Output = usize;

    fn visit(&mut self, _: (&[u8; N],)) -> usize {
        N
    }
}

#[test]
fn sixty_four_alternatives() {
    let first = Wide::new([0u8; 0]);
    let middle = Wide::new([0u8; 40]);
    let last = Wide::new([0u8; 63]);

    assert_eq!(
        (first.which(), middle.which(), last.which()),
        (Some(0), Some(40), Some(63))
    );
    assert_eq!(apply(Len, (&first,)), Ok(0));
    assert_eq!(apply(Len, (&middle,)), Ok(40));
    assert_eq!(apply(Len, (&last,)), Ok(63));
    assert_eq!(last.get::<[u8; 63], _>(), Some(&[0u8; 63]));
}
