//! The pure geometry solver behind [`Layout`](super::Layout).

use serde::{Deserialize, Serialize};

use super::SLOTS;
use crate::geom::{Axis, Rect, partition};

/// How much of the main axis a slot asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Size {
    /// An exact number of cells, shrunk proportionally only when the fixed
    /// slots together overflow the available space.
    Fixed(u32),
    /// A share of the space left after fixed slots are served.
    Weight(u32),
}

impl Default for Size {
    fn default() -> Self {
        Self::Weight(1)
    }
}

impl Size {
    /// A policy that asks for nothing would collapse the slot out of the
    /// arithmetic, so it is treated as `Weight(1)`.
    pub fn normalize(self) -> Self {
        match self {
            Self::Fixed(0) | Self::Weight(0) => Self::Weight(1),
            s => s,
        }
    }
}

/// Placement of the slots along the main axis when they do not fill it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Align {
    /// Pack at the start.
    #[default]
    Start,
    /// Centre the packed slots.
    Center,
    /// Pack at the end.
    End,
}

/// Placement of each slot along the cross axis. Only `Stretch` is
/// implemented: without a preferred-size query there is nothing to align a
/// smaller child against, so the other values behave as `Stretch`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CrossAlign {
    /// Fill the full cross extent.
    #[default]
    Stretch,
    /// Accepted, behaves as `Stretch`.
    Start,
    /// Accepted, behaves as `Stretch`.
    Center,
    /// Accepted, behaves as `Stretch`.
    End,
}

/// Everything the solver needs from a layout, copied out from under its lock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolveInput {
    /// The layout's rectangle.
    pub rect: Rect,
    /// The main axis.
    pub axis: Axis,
    /// Cells between adjacent active slots.
    pub gap: u32,
    /// Main-axis alignment.
    pub align: Align,
    /// The size policy of each active slot; `None` for inactive slots.
    pub sizes: [Option<Size>; SLOTS],
}

/// Compute the rectangle of every active slot.
///
/// Returns `None` when there is nothing to do: no active slots, or a
/// rectangle that is not drawable. Callers then leave prior geometry alone.
pub fn solve(input: &SolveInput) -> Option<[Option<Rect>; SLOTS]> {
    let active = input.sizes.iter().flatten().count();
    if active == 0 || !input.rect.is_drawable() {
        return None;
    }
    let axis = input.axis;
    let main = i64::from(input.rect.extent(axis));
    let cross = input.rect.extent(axis.cross());

    let total_gap = i64::from(input.gap) * (active as i64 - 1);
    let available = u32::try_from((main - total_gap).max(0)).unwrap_or(u32::MAX);

    let sizes = allocate(available, &input.sizes);
    let used: u32 = sizes.iter().flatten().sum();

    let offset = match input.align {
        Align::Start => 0,
        Align::Center => (available - used) / 2,
        Align::End => available - used,
    };

    let mut ret = [None; SLOTS];
    let mut cursor = i64::from(input.rect.offset(axis)) + i64::from(offset);
    for (i, size) in sizes.iter().enumerate() {
        let Some(size) = *size else {
            continue;
        };
        let main_off = clamp_i32(cursor);
        let len = i32::try_from(size).unwrap_or(i32::MAX);
        ret[i] = Some(Rect::from_axes(
            axis,
            main_off,
            len,
            input.rect.offset(axis.cross()),
            cross,
        ));
        // A zero-size slot takes no gap after it, so collapsed slots never
        // leave a double gap behind.
        if size > 0 {
            cursor += i64::from(size) + i64::from(input.gap);
        }
    }
    Some(ret)
}

/// Split `available` cells among the active slots: fixed slots first, then
/// proportional slots from whatever remains. The result never sums to more
/// than `available`.
pub fn allocate(available: u32, sizes: &[Option<Size>; SLOTS]) -> [Option<u32>; SLOTS] {
    let mut fixed_slots = Vec::new();
    let mut fixed_reqs = Vec::new();
    let mut weight_slots = Vec::new();
    let mut weights = Vec::new();
    for (i, s) in sizes.iter().enumerate() {
        match s.map(Size::normalize) {
            Some(Size::Fixed(n)) => {
                fixed_slots.push(i);
                fixed_reqs.push(n);
            }
            Some(Size::Weight(w)) => {
                weight_slots.push(i);
                weights.push(w);
            }
            None => {}
        }
    }

    let requested: u64 = fixed_reqs.iter().map(|v| u64::from(*v)).sum();
    let fixed = if requested <= u64::from(available) {
        fixed_reqs
    } else {
        partition(available, &fixed_reqs)
    };
    let consumed: u32 = fixed.iter().sum();
    let proportional = partition(available - consumed, &weights);

    let mut ret = [None; SLOTS];
    for (slot, n) in fixed_slots.into_iter().zip(fixed) {
        ret[slot] = Some(n);
    }
    for (slot, n) in weight_slots.into_iter().zip(proportional) {
        ret[slot] = Some(n);
    }
    ret
}

/// Saturating conversion of a cursor position.
fn clamp_i32(v: i64) -> i32 {
    i32::try_from(v).unwrap_or(if v < 0 { i32::MIN } else { i32::MAX })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    /// Build a solver input from a list of policies in slots 0..n.
    fn input(rect: Rect, axis: Axis, gap: u32, align: Align, sizes: &[Size]) -> SolveInput {
        let mut s = [None; SLOTS];
        for (i, v) in sizes.iter().enumerate() {
            s[i] = Some(*v);
        }
        SolveInput {
            rect,
            axis,
            gap,
            align,
            sizes: s,
        }
    }

    /// The rects of the active slots, in slot order.
    fn rects(input: &SolveInput) -> Vec<Rect> {
        solve(input).unwrap().into_iter().flatten().collect()
    }

    #[test]
    fn weighted_row() {
        let i = input(
            Rect::new(0, 0, 100, 10),
            Axis::Horizontal,
            1,
            Align::Start,
            &[Size::Weight(1), Size::Weight(1), Size::Weight(2)],
        );
        assert_eq!(
            rects(&i),
            vec![
                Rect::new(0, 0, 25, 10),
                Rect::new(26, 0, 24, 10),
                Rect::new(51, 0, 49, 10),
            ]
        );
    }

    #[test]
    fn column_offsets() {
        let i = input(
            Rect::new(5, 7, 8, 10),
            Axis::Vertical,
            0,
            Align::Start,
            &[Size::Fixed(3), Size::Weight(1)],
        );
        assert_eq!(rects(&i), vec![Rect::new(5, 7, 8, 3), Rect::new(5, 10, 8, 7)]);
    }

    #[test]
    fn fixed_then_weighted() {
        let i = input(
            Rect::new(0, 0, 30, 1),
            Axis::Horizontal,
            0,
            Align::Start,
            &[Size::Weight(1), Size::Fixed(10), Size::Weight(1)],
        );
        assert_eq!(
            rects(&i),
            vec![
                Rect::new(0, 0, 10, 1),
                Rect::new(10, 0, 10, 1),
                Rect::new(20, 0, 10, 1),
            ]
        );
    }

    #[test]
    fn fixed_overflow() {
        // 3 x 10 requested, 20 available: floor(20/3) = 6 each, 2 left over
        // for slots 0 and 1
        let i = input(
            Rect::new(0, 0, 20, 1),
            Axis::Horizontal,
            0,
            Align::Start,
            &[Size::Fixed(10), Size::Fixed(10), Size::Fixed(10), Size::Weight(5)],
        );
        let sizes: Vec<i32> = rects(&i).iter().map(|r| r.w).collect();
        assert_eq!(sizes, vec![7, 7, 6, 0]);
    }

    #[test]
    fn alignment() {
        let sizes = [Size::Fixed(4), Size::Fixed(2)];
        let r = Rect::new(10, 0, 20, 1);
        let at = |align| {
            rects(&input(r, Axis::Horizontal, 1, align, &sizes))
                .iter()
                .map(|r| r.tl.x)
                .collect::<Vec<_>>()
        };
        // available = 19, used = 6
        assert_eq!(at(Align::Start), vec![10, 15]);
        assert_eq!(at(Align::Center), vec![16, 21]);
        assert_eq!(at(Align::End), vec![23, 28]);
    }

    #[test]
    fn zero_size_takes_no_gap() {
        // Fixed slots fill the space, leaving the weighted slot with nothing
        let i = input(
            Rect::new(0, 0, 12, 1),
            Axis::Horizontal,
            2,
            Align::Start,
            &[Size::Fixed(4), Size::Weight(1), Size::Fixed(4)],
        );
        assert_eq!(
            rects(&i),
            vec![
                Rect::new(0, 0, 4, 1),
                Rect::new(6, 0, 0, 1),
                Rect::new(6, 0, 4, 1),
            ]
        );
    }

    #[test]
    fn gaps_wider_than_rect() {
        let i = input(
            Rect::new(0, 0, 3, 1),
            Axis::Horizontal,
            5,
            Align::Center,
            &[Size::Weight(1), Size::Fixed(2)],
        );
        let r = rects(&i);
        assert!(r.iter().all(|r| r.w == 0));
    }

    #[test]
    fn degenerate_policies() {
        let i = input(
            Rect::new(0, 0, 9, 1),
            Axis::Horizontal,
            0,
            Align::Start,
            &[Size::Weight(0), Size::Fixed(0), Size::Weight(1)],
        );
        let sizes: Vec<i32> = rects(&i).iter().map(|r| r.w).collect();
        assert_eq!(sizes, vec![3, 3, 3]);
    }

    #[test]
    fn nothing_to_do() {
        let mut i = input(
            Rect::new(0, 0, 0, 10),
            Axis::Horizontal,
            0,
            Align::Start,
            &[Size::Weight(1)],
        );
        assert_eq!(solve(&i), None);
        i.rect = Rect::new(0, 0, 10, -1);
        assert_eq!(solve(&i), None);
        i.rect = Rect::new(0, 0, 10, 10);
        i.sizes = [None; SLOTS];
        assert_eq!(solve(&i), None);
    }

    #[test]
    fn sparse_slots() {
        let mut sizes = [None; SLOTS];
        sizes[2] = Some(Size::Weight(1));
        sizes[7] = Some(Size::Weight(1));
        let i = SolveInput {
            rect: Rect::new(0, 0, 11, 2),
            axis: Axis::Horizontal,
            gap: 1,
            align: Align::Start,
            sizes,
        };
        let out = solve(&i).unwrap();
        assert_eq!(out[2], Some(Rect::new(0, 0, 5, 2)));
        assert_eq!(out[7], Some(Rect::new(6, 0, 5, 2)));
        assert_eq!(out.iter().flatten().count(), 2);
    }

    /// Arbitrary size policies, including the degenerate zero values.
    fn size_strategy() -> impl Strategy<Value = Size> {
        prop_oneof![
            (0u32..200).prop_map(Size::Fixed),
            (0u32..20).prop_map(Size::Weight),
        ]
    }

    proptest! {
        #[test]
        fn conserves_space(
            width in 1i32..500,
            gap in 0u32..5,
            fixed in prop::collection::vec(1u32..200, 0..5),
            weights in prop::collection::vec(1u32..20, 1..5),
        ) {
            let mut sizes: Vec<Size> = fixed.into_iter().map(Size::Fixed).collect();
            sizes.extend(weights.into_iter().map(Size::Weight));
            let n = sizes.len() as i64;
            let i = input(Rect::new(0, 0, width, 1), Axis::Horizontal, gap, Align::Start, &sizes);
            let total: i64 = rects(&i).iter().map(|r| i64::from(r.w)).sum();
            let available = (i64::from(width) - i64::from(gap) * (n - 1)).max(0);
            prop_assert_eq!(total, available);
        }

        #[test]
        fn never_negative_never_over(
            width in 1i32..300,
            gap in 0u32..10,
            sizes in prop::collection::vec(size_strategy(), 1..=SLOTS),
            align in prop_oneof![Just(Align::Start), Just(Align::Center), Just(Align::End)],
        ) {
            let n = sizes.len() as i64;
            let rect = Rect::new(3, 0, width, 1);
            let i = input(rect, Axis::Horizontal, gap, align, &sizes);
            let out = rects(&i);
            let available = (i64::from(width) - i64::from(gap) * (n - 1)).max(0);
            let total: i64 = out.iter().map(|r| i64::from(r.w)).sum();
            prop_assert!(out.iter().all(|r| r.w >= 0));
            prop_assert!(total <= available);
            prop_assert!(out.iter().all(|r| r.right() <= rect.right()));
        }

        #[test]
        fn fixed_overflow_is_fair(req in 1u32..100, n in 1usize..=SLOTS, width in 1i32..300) {
            let sizes = vec![Size::Fixed(req); n];
            let avail = u32::try_from(width).unwrap();
            prop_assume!(u64::from(req) * n as u64 > u64::from(avail));
            let i = input(Rect::new(0, 0, width, 1), Axis::Horizontal, 0, Align::Start, &sizes);
            let out = rects(&i);
            let base = avail / n as u32;
            let extra = (avail % n as u32) as usize;
            for (k, r) in out.iter().enumerate() {
                let want = if k < extra { base + 1 } else { base };
                prop_assert_eq!(r.w, want as i32);
            }
        }
    }
}
