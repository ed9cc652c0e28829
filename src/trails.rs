use std::collections::VecDeque;

use crate::Point;

/// How many past positions a trail keeps.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TrailLimit {
    #[default]
    Unbounded,
    /// Keep at most this many points, dropping the oldest first.
    Capped(usize),
}

impl From<Option<usize>> for TrailLimit {
    fn from(max: Option<usize>) -> Self {
        max.map_or(TrailLimit::Unbounded, TrailLimit::Capped)
    }
}

/// Positions a body has passed through, oldest first.
#[derive(Clone, Debug)]
pub struct Trail {
    nodes: VecDeque<Point>,
    limit: TrailLimit,
}

impl Trail {
    pub fn new(limit: TrailLimit) -> Self {
        let nodes = match limit {
            TrailLimit::Unbounded => VecDeque::new(),
            TrailLimit::Capped(max) => VecDeque::with_capacity(max),
        };

        Self { nodes, limit }
    }

    pub fn push(&mut self, pos: Point) {
        if let TrailLimit::Capped(max) = self.limit {
            if max == 0 {
                return;
            }
            while self.nodes.len() >= max {
                self.nodes.pop_front();
            }
        }
        self.nodes.push_back(pos);
    }

    #[inline]
    pub fn limit(&self) -> TrailLimit {
        self.limit
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[inline]
    pub fn last(&self) -> Option<&Point> {
        self.nodes.back()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Point> + '_ {
        self.nodes.iter()
    }

    pub fn points(&self) -> Vec<Point> {
        self.nodes.iter().copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unbounded_keeps_everything_in_order() {
        let mut trail = Trail::new(TrailLimit::Unbounded);
        for i in 0..500 {
            trail.push(Point::new(i as f64, 0.0));
        }

        assert_eq!(trail.len(), 500);
        assert_eq!(trail.iter().next(), Some(&Point::new(0.0, 0.0)));
        assert_eq!(trail.last(), Some(&Point::new(499.0, 0.0)));
    }

    #[test]
    fn capped_drops_oldest() {
        let mut trail = Trail::new(TrailLimit::Capped(3));
        for i in 0..5 {
            trail.push(Point::new(i as f64, 0.0));
        }

        let xs: Vec<f64> = trail.iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![2.0, 3.0, 4.0]);
    }

    #[test]
    fn zero_cap_keeps_nothing() {
        let mut trail = Trail::new(TrailLimit::Capped(0));
        trail.push(Point::new(1.0, 1.0));
        assert!(trail.is_empty());
    }

    #[test]
    fn optional_cap_maps_to_limit() {
        assert_eq!(TrailLimit::from(None), TrailLimit::Unbounded);
        assert_eq!(TrailLimit::from(Some(7)), TrailLimit::Capped(7));
        assert_eq!(Trail::new(TrailLimit::from(Some(2))).limit(), TrailLimit::Capped(2));
    }
}
