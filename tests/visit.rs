use pretty_assertions::assert_eq;
use tvariant::{BadAccess, Variant, Visitor, apply, apply_as, index::U1, visitor};

type Bytes = Variant![
    [u8; 0], [u8; 1], [u8; 2], [u8; 3], [u8; 4], [u8; 5], [u8; 6], [u8; 7],
    [u8; 8], [u8; 9], [u8; 10], [u8; 11], [u8; 12], [u8; 13], [u8; 14], [u8; 15],
    [u8; 16], [u8; 17], [u8; 18], [u8; 19], [u8; 20], [u8; 21], [u8; 22],
    [u8; 23], [u8; 24], [u8; 25], [u8; 26], [u8; 27], [u8; 28], [u8; 29],
    [u8; 30], [u8; 31],
];

type Shape = Variant![Circle, Rect, Rect];

#[derive(Debug, Clone, PartialEq)]
struct Circle {
    r: f64,
}

#[derive(Debug, Clone, PartialEq)]
struct Rect {
    w: f64,
    h: f64,
}

struct Scale(f64);

impl Visitor<(&mut Circle,)> for Scale {
    type Output = ();

    fn visit(&mut self, (c,): (&mut Circle,)) {
        c.r *= self.0;
    }
}

impl Visitor<(&mut Rect,)> for Scale {
    type Output = ();

    fn visit(&mut self, (rect,): (&mut Rect,)) {
        rect.w *= self.0;
        rect.h *= self.0;
    }
}

fn area(shape: &Shape) -> Result<f64, BadAccess> {
    apply(
        visitor!(|c: &Circle| 3.0 * c.r * c.r, |r: &Rect| r.w * r.h),
        (shape,),
    )
}

#[test]
fn visit_shapes() {
    let mut shapes = vec![
        Shape::new(Circle { r: 1.0 }),
        Shape::new::<_, U1>(Rect { w: 2.0, h: 3.0 }),
        Shape::empty(),
    ];

    let areas: Vec<_> = shapes.iter().map(area).collect();
    assert_eq!(areas, [Ok(3.0), Ok(6.0), Err(BadAccess)]);

    for shape in shapes.iter_mut().filter(|s| !s.is_empty()) {
        apply(Scale(2.0), (shape,)).unwrap();
    }
    assert_eq!(shapes[0].get::<Circle, _>(), Some(&Circle { r: 2.0 }));
    assert_eq!(shapes[1].get::<_, U1>(), Some(&Rect { w: 4.0, h: 6.0 }));
    assert_eq!(shapes[2].which(), None);
}

#[test]
fn pairs_of_owned_values() {
    let left: Variant![u8, char] = Variant::new('x');
    let right: Variant![u8, char] = Variant::new(3u8);

    let repeated = apply_as::<String, _, _>(
        visitor!(
            |a: u8, b: u8| format!("{a}{b}"),
            |a: u8, b: char| format!("{a}{b}"),
            |c: char, n: u8| c.to_string().repeat(n.into()),
            |a: char, b: char| format!("{a}{b}"),
        ),
        (left, right),
    );
    assert_eq!(repeated.as_deref(), Ok("xxx"));
}

struct Len;

impl<const N: usize> Visitor<(&[u8; N],)> for Len {
    type Output = usize;

    fn visit(&mut self, _: (&[u8; N],)) -> usize {
        N
    }
}

#[test]
fn thirty_two_alternatives() {
    let samples = [
        Bytes::new([0u8; 0]),
        Bytes::new([0u8; 1]),
        Bytes::new([0u8; 15]),
        Bytes::new([0u8; 16]),
        Bytes::new([0u8; 30]),
        Bytes::new([7u8; 31]),
    ];

    let lens: Vec<usize> = samples.iter().map(|v| apply(Len, (v,)).unwrap()).collect();
    assert_eq!(lens, [0, 1, 15, 16, 30, 31]);

    let which: Vec<_> = samples.iter().filter_map(Bytes::which).collect();
    assert_eq!(which, lens);
}
