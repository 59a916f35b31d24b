//! Demonstration of `MaybeSlot` with a point-coordinate payload.
//!
//! Shows the ways a function can hand back an optional result (empty,
//! default-engaged, or value-engaged) and the read-access patterns on the
//! consumer side.

use maybeslot::{slot_of, MaybeSlot};

#[derive(Clone, Copy, Debug, Default)]
struct Point {
    x: f32,
    y: f32,
}

impl Point {
    fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A computation that produced no point.
fn absent() -> MaybeSlot<Point> {
    MaybeSlot::empty()
}

/// A computation that fell back to the origin.
fn origin() -> MaybeSlot<Point> {
    MaybeSlot::with_default()
}

/// A computation that produced a concrete value.
fn answer() -> MaybeSlot<i32> {
    slot_of(7)
}

fn main() {
    // Deferred initialization with constructor arguments.
    let mut point = MaybeSlot::<Point>::new();
    if point.is_empty() {
        point.emplace_with(|| Point::new(1.0, 2.0));
    }
    println!("emplaced: {:?}", point.get());

    // Deferred default initialization.
    let mut fallback = MaybeSlot::<Point>::new();
    fallback.reset_default();
    println!("default:  {:?}", fallback.get());

    // Engaging from an existing value.
    let existing = Point::new(3.0, 4.0);
    let copied = slot_of(existing);

    if let Some(p) = copied.get() {
        println!("x through get:   {}", p.x);
    }
    if copied.is_engaged() {
        println!("x through deref: {}", copied.x);
    }

    println!("absent: {:?}", absent().get());
    println!("origin: {:?}", origin().get());
    println!("answer: {:?}", answer().get());
}
