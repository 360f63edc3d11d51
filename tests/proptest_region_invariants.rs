//! Property-based tests for crop region geometry.
//!
//! 1. **Bounds**: every operation, and every sequence of operations through
//!    the controller, yields a region inside the container with both sides at
//!    least `MIN_SIZE`.
//!
//! 2. **No drift**: a zero delta on any handle returns the origin exactly.
//!
//! 3. **Axis isolation**: edges touch only their own axis; moves never
//!    change the size.
//!
//! 4. **Aspect**: a conformed region matches the ratio unless the
//!    `MIN_SIZE` floor kicked in.
//!
//! 5. **Subscription balance**: after any event sequence and teardown,
//!    every pointer subscription has been released.
//!
//! 6. **Pixel round trip**: percent → pixels → percent stays within one
//!    pixel.

use std::cell::RefCell;
use std::rc::Rc;

use proptest::prelude::*;
use zencrop::coords::{self, ContainerRect, Rect, Size};
use zencrop::{
    Anchor, AspectRatio, Corner, CropOptions, CropRegion, Cropper, Edge, Handle, MIN_SIZE,
    PointerSource, aspect, geometry,
};

const EPS: f64 = 1e-9;

// ── Strategies ──────────────────────────────────────────────────────────

/// Valid regions on a 1/64 percent grid, so sums like `x + width` are exact.
fn region() -> impl Strategy<Value = CropRegion> {
    const STEPS: u32 = 6400;
    const MIN_STEPS: u32 = 320;
    (MIN_STEPS..=STEPS, MIN_STEPS..=STEPS, 0.0..=1.0f64, 0.0..=1.0f64).prop_map(
        |(w, h, fx, fy)| {
            let x = (f64::from(STEPS - w) * fx) as u32;
            let y = (f64::from(STEPS - h) * fy) as u32;
            let pct = |v: u32| f64::from(v) / 64.0;
            CropRegion::new(pct(x), pct(y), pct(w), pct(h))
        },
    )
}

fn any_region() -> impl Strategy<Value = CropRegion> {
    (
        -200.0..200.0f64,
        -200.0..200.0f64,
        -200.0..200.0f64,
        -200.0..200.0f64,
    )
        .prop_map(|(x, y, w, h)| CropRegion::new(x, y, w, h))
}

fn handle() -> impl Strategy<Value = Handle> {
    prop_oneof![
        Just(Handle::Move),
        prop::sample::select(Corner::ALL.to_vec()).prop_map(Handle::Corner),
        prop::sample::select(Edge::ALL.to_vec()).prop_map(Handle::Edge),
    ]
}

fn ratio() -> impl Strategy<Value = AspectRatio> {
    prop_oneof![
        prop::sample::select(vec![
            AspectRatio::SQUARE,
            AspectRatio::STANDARD,
            AspectRatio::WIDESCREEN,
            AspectRatio::PHOTO,
            AspectRatio::STORY,
            AspectRatio::ULTRAWIDE,
        ]),
        (0.25..4.0f64).prop_map(|v| AspectRatio::new(v, 1.0).unwrap()),
    ]
}

fn delta() -> impl Strategy<Value = (f64, f64)> {
    (-150.0..150.0f64, -150.0..150.0f64)
}

fn anchor() -> impl Strategy<Value = Anchor> {
    prop::sample::select(Anchor::ALL.to_vec())
}

// ── Helpers ─────────────────────────────────────────────────────────────

fn assert_in_bounds(r: &CropRegion) {
    assert!(r.x >= 0.0 && r.y >= 0.0, "{r:?}");
    assert!(r.width >= MIN_SIZE && r.height >= MIN_SIZE, "{r:?}");
    assert!(r.right() <= 100.0 + EPS && r.bottom() <= 100.0 + EPS, "{r:?}");
}

// ── Geometry ────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn apply_stays_in_bounds(
        origin in any_region(),
        d in delta(),
        h in handle(),
        lock in prop::option::of(ratio()),
    ) {
        assert_in_bounds(&geometry::apply(origin, d, h, lock));
    }

    #[test]
    fn zero_delta_returns_origin(origin in region(), h in handle()) {
        prop_assert_eq!(geometry::apply(origin, (0.0, 0.0), h, None), origin);
    }

    #[test]
    fn move_preserves_size(origin in region(), d in delta()) {
        let r = geometry::apply(origin, d, Handle::Move, None);
        prop_assert_eq!(r.width, origin.width);
        prop_assert_eq!(r.height, origin.height);
    }

    #[test]
    fn horizontal_edges_leave_vertical_axis(
        origin in region(),
        d in delta(),
        e in prop::sample::select(vec![Edge::Left, Edge::Right]),
        lock in prop::option::of(ratio()),
    ) {
        let r = geometry::apply(origin, d, Handle::Edge(e), lock);
        prop_assert_eq!(r.y, origin.y);
        prop_assert_eq!(r.height, origin.height);
    }

    #[test]
    fn vertical_edges_leave_horizontal_axis(
        origin in region(),
        d in delta(),
        e in prop::sample::select(vec![Edge::Top, Edge::Bottom]),
        lock in prop::option::of(ratio()),
    ) {
        let r = geometry::apply(origin, d, Handle::Edge(e), lock);
        prop_assert_eq!(r.x, origin.x);
        prop_assert_eq!(r.width, origin.width);
    }

    #[test]
    fn unclamped_left_drag_keeps_right_edge(origin in region(), dx in -150.0..150.0f64) {
        prop_assume!(origin.x + dx >= 0.0);
        prop_assume!(origin.width - dx >= MIN_SIZE);
        let r = geometry::apply(origin, (dx, 0.0), Handle::Edge(Edge::Left), None);
        prop_assert!((r.right() - origin.right()).abs() < EPS, "{:?} vs {:?}", r, origin);
    }

    #[test]
    fn normalized_is_idempotent(r in any_region()) {
        let once = r.normalized();
        prop_assert_eq!(once.normalized(), once);
        assert_in_bounds(&once);
    }

    #[test]
    fn anchored_keeps_size(r in region(), a in anchor()) {
        let placed = r.anchored(a);
        prop_assert_eq!(placed.width, r.width);
        prop_assert_eq!(placed.height, r.height);
        assert_in_bounds(&placed);
    }
}

// ── Aspect ──────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn conform_matches_ratio_above_floor(r in any_region(), target in ratio()) {
        let c = aspect::conform(r, target);
        assert_in_bounds(&c);
        if c.width > MIN_SIZE && c.height > MIN_SIZE {
            let want = target.value();
            prop_assert!(
                (c.ratio() - want).abs() <= EPS * want.max(1.0),
                "{:?} is not {}", c, target
            );
        }
    }

    #[test]
    fn conform_never_grows(r in region(), target in ratio()) {
        let c = aspect::conform(r, target);
        prop_assume!(c.width > MIN_SIZE && c.height > MIN_SIZE);
        prop_assert!(c.width <= r.width + EPS);
        prop_assert!(c.height <= r.height + EPS);
    }

    #[test]
    fn pointer_maps_into_percent_space(
        px in -1e4..1e4f64,
        py in -1e4..1e4f64,
        left in -500.0..500.0f64,
        top in -500.0..500.0f64,
        w in 0.0..2000.0f64,
        h in 0.0..2000.0f64,
    ) {
        let p = coords::to_percent(px, py, &ContainerRect::new(left, top, w, h));
        prop_assert!((0.0..=100.0).contains(&p.x));
        prop_assert!((0.0..=100.0).contains(&p.y));
    }
}

// ── Controller sequences ────────────────────────────────────────────────

#[derive(Clone, Debug)]
enum Op {
    Down(Handle, f64, f64),
    Move(f64, f64),
    Up,
    Cancel,
    Reset,
    Fit,
    Aspect(Option<AspectRatio>),
    Align(Anchor),
    Pixels(u32, u32, u32, u32),
}

fn op() -> impl Strategy<Value = Op> {
    let device = -100.0..500.0f64;
    prop_oneof![
        3 => (handle(), device.clone(), device.clone()).prop_map(|(h, x, y)| Op::Down(h, x, y)),
        6 => (device.clone(), device).prop_map(|(x, y)| Op::Move(x, y)),
        2 => Just(Op::Up),
        1 => Just(Op::Cancel),
        1 => Just(Op::Reset),
        1 => Just(Op::Fit),
        1 => prop::option::of(ratio()).prop_map(Op::Aspect),
        1 => anchor().prop_map(Op::Align),
        1 => (0..1500u32, 0..1000u32, 0..1500u32, 0..1000u32)
            .prop_map(|(x, y, w, h)| Op::Pixels(x, y, w, h)),
    ]
}

#[derive(Clone, Default)]
struct Balance(Rc<RefCell<(u32, u32)>>);

impl PointerSource for Balance {
    fn subscribe(&mut self) {
        self.0.borrow_mut().0 += 1;
    }

    fn unsubscribe(&mut self) {
        self.0.borrow_mut().1 += 1;
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn event_sequences_keep_invariants(
        initial in any_region(),
        lock in prop::option::of(ratio()),
        ops in prop::collection::vec(op(), 1..60),
    ) {
        let balance = Balance::default();
        let options = CropOptions::new().initial_crop(initial).aspect_ratio(lock);
        let notified = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&notified);
        let mut cropper = Cropper::new(options, balance.clone(), move |r: &CropRegion| {
            sink.borrow_mut().push(*r);
        });
        cropper.set_container(ContainerRect::new(0.0, 0.0, 400.0, 300.0));
        cropper.load_image(Size::new(1200, 900)).unwrap();

        for op in ops {
            match op {
                Op::Down(h, x, y) => {
                    cropper.pointer_down(h, x, y);
                }
                Op::Move(x, y) => {
                    cropper.pointer_move(x, y);
                }
                Op::Up => {
                    cropper.pointer_up();
                }
                Op::Cancel => {
                    cropper.pointer_cancel();
                }
                Op::Reset => {
                    cropper.reset_crop();
                }
                Op::Fit => {
                    cropper.fit_to_image();
                }
                Op::Aspect(r) => {
                    cropper.change_aspect_ratio(r);
                }
                Op::Align(a) => {
                    cropper.align(a);
                }
                Op::Pixels(x, y, w, h) => {
                    cropper.set_pixel_crop(Rect::new(x, y, w, h)).unwrap();
                }
            }
            assert_in_bounds(&cropper.region());
            let (subs, unsubs) = *balance.0.borrow();
            prop_assert_eq!(subs - unsubs == 1, cropper.is_dragging());
        }

        prop_assert_eq!(notified.borrow().last().copied(), Some(cropper.region()));
        drop(cropper);
        let (subs, unsubs) = *balance.0.borrow();
        prop_assert_eq!(subs, unsubs);
    }
}

// ── Pixel projection ────────────────────────────────────────────────────

proptest! {
    #[test]
    fn pixel_round_trip_within_one_pixel(
        w in 20..6000u32,
        h in 20..6000u32,
        fx in 0.0..=1.0f64,
        fy in 0.0..=1.0f64,
        fw in 0.0..=1.0f64,
        fh in 0.0..=1.0f64,
    ) {
        // Keep each side at or above MIN_SIZE percent so the floor never applies.
        let (min_w, min_h) = (w.div_ceil(20), h.div_ceil(20));
        let x = (fx * f64::from(w - min_w)) as u32;
        let y = (fy * f64::from(h - min_h)) as u32;
        let rw = min_w + (fw * f64::from(w - x - min_w)) as u32;
        let rh = min_h + (fh * f64::from(h - y - min_h)) as u32;
        let rect = Rect::new(x, y, rw, rh);
        let image = Size::new(w, h);

        let back = coords::to_pixels(&coords::from_pixels(rect, image), image);
        for (a, b) in [(back.x, x), (back.y, y), (back.width, rw), (back.height, rh)] {
            prop_assert!(a.abs_diff(b) <= 1, "{:?} vs {:?}", back, rect);
        }
    }

    #[test]
    fn to_pixels_stays_on_image(r in region(), w in 1..6000u32, h in 1..6000u32) {
        let px = coords::to_pixels(&r, Size::new(w, h));
        prop_assert!(px.x + px.width <= w + 1);
        prop_assert!(px.y + px.height <= h + 1);
    }
}
