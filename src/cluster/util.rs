use crate::distance::Distance;

/// Member furthest from `points[anchor]`. Ties keep the first in `members` order.
pub(crate) fn furthest_from<T, D>(
    points: &[T],
    anchor: usize,
    members: &[usize],
    distance: &D,
) -> Option<usize>
where
    D: Distance<T> + ?Sized,
{
    let a = &points[anchor];
    let mut best: Option<(usize, usize)> = None;
    for &idx in members {
        let d = distance.distance(a, &points[idx]);
        match best {
            Some((_, best_d)) if d <= best_d => {}
            _ => best = Some((idx, d)),
        }
    }
    best.map(|(idx, _)| idx)
}

/// Members that fall on the `far` side of a two-way split between `anchor` and `far`.
///
/// A member goes to the anchor side only when it is strictly nearer to the
/// anchor; equal distances go to the far side. In particular `far` itself is
/// always on the far side, so the result is non-empty whenever `far` is a
/// member.
pub(crate) fn far_side<T, D>(
    points: &[T],
    anchor: usize,
    far: usize,
    members: &[usize],
    distance: &D,
) -> Vec<usize>
where
    D: Distance<T> + ?Sized,
{
    let a = &points[anchor];
    let f = &points[far];
    members
        .iter()
        .copied()
        .filter(|&idx| {
            let p = &points[idx];
            distance.distance(p, a) >= distance.distance(p, f)
        })
        .collect()
}

/// Position in `medoids` of the medoid nearest to `points[idx]`.
///
/// Ties keep the earliest medoid.
pub(crate) fn nearest_medoid<T, D>(
    points: &[T],
    idx: usize,
    medoids: &[usize],
    distance: &D,
) -> Option<usize>
where
    D: Distance<T> + ?Sized,
{
    let p = &points[idx];
    let mut best: Option<(usize, usize)> = None;
    for (pos, &m) in medoids.iter().enumerate() {
        let d = distance.distance(&points[m], p);
        match best {
            Some((_, best_d)) if d >= best_d => {}
            _ => best = Some((pos, d)),
        }
    }
    best.map(|(pos, _)| pos)
}
