use crate::{Point, Range};

pub fn p(pos: i64) -> Point {
	Point::new(pos).unwrap()
}
pub fn r(start: i64, stop: i64) -> Range {
	Range::new(start, stop).unwrap()
}
pub fn rs(start: i64, stop: i64, seq: &str) -> Range {
	Range::builder(start).stop(stop).seq(seq).build().unwrap()
}
