use oledstat_config::{LayoutConfig, Strategy};

/// Where rows land this cycle.  Starts neutral and advances once per frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutOffset {
    /// Everything shifted down by `y` pixels, wrapping at the bottom edge.
    Scroll { y: u32 },
    /// Row `i` occupies slot `(i + index) % slots`, all drawing shifted by `jitter`.
    Rotate { index: usize, jitter: (i32, i32) },
}

impl LayoutOffset {
    pub fn initial(strategy: Strategy) -> Self {
        match strategy {
            Strategy::Scroll => Self::Scroll { y: 0 },
            Strategy::Rotate => Self::Rotate { index: 0, jitter: (0, 0) },
        }
    }

    /// Step to the next cycle's placement.
    pub fn advance(&mut self, layout: &LayoutConfig, display_height: u32, rng: &mut fastrand::Rng) {
        match self {
            Self::Scroll { y } => {
                let next = (u64::from(*y) + u64::from(layout.scroll_step))
                    % u64::from(display_height.max(1));
                *y = next as u32;
            }
            Self::Rotate { index, jitter } => {
                *index = (*index + 1) % layout.line_anchors.len().max(1);
                let max = i32::try_from(layout.jitter).unwrap_or(i32::MAX);
                *jitter = (rng.i32(0..=max), rng.i32(0..=max));
            }
        }
    }

    /// Top-left origins for an element of `row`, `top` pixels below the row
    /// anchor and `extent` pixels tall.
    ///
    /// When scrolling, an element reaching the bottom edge gets a second origin
    /// one display height higher so it reappears at the top.
    pub fn origins(
        &self,
        layout: &LayoutConfig,
        row: usize,
        top: u32,
        extent: u32,
        display_height: u32,
    ) -> Vec<(i32, i32)> {
        let anchors = &layout.line_anchors;
        if anchors.is_empty() || display_height == 0 {
            return Vec::new();
        }

        match *self {
            Self::Scroll { y: scroll } => {
                let anchor = anchors[row % anchors.len()];
                let sum = u64::from(anchor) + u64::from(top) + u64::from(scroll);
                let y = (sum % u64::from(display_height)) as i32;
                let mut origins = vec![(0, y)];
                if y + extent as i32 >= display_height as i32 {
                    origins.push((0, y - display_height as i32));
                }
                origins
            }
            Self::Rotate { index, jitter: (dx, dy) } => {
                let anchor = anchors[(row + index) % anchors.len()];
                let y = i32::try_from(u64::from(anchor) + u64::from(top)).unwrap_or(i32::MAX);
                vec![(dx, y.saturating_add(dy))]
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scroll_wraps_modulo_height() {
        let layout = LayoutConfig::default();
        let mut rng = fastrand::Rng::with_seed(7);
        let mut offset = LayoutOffset::initial(Strategy::Scroll);
        for _ in 0..63 {
            offset.advance(&layout, 64, &mut rng);
        }
        assert_eq!(offset, LayoutOffset::Scroll { y: 63 });
        offset.advance(&layout, 64, &mut rng);
        assert_eq!(offset, LayoutOffset::Scroll { y: 0 });
    }

    #[test]
    fn rotation_index_is_periodic_in_line_count() {
        let layout = LayoutConfig::default();
        let mut rng = fastrand::Rng::with_seed(42);
        let mut offset = LayoutOffset::initial(Strategy::Rotate);

        let mut seen = Vec::new();
        for _ in 0..layout.line_anchors.len() {
            offset.advance(&layout, 64, &mut rng);
            let LayoutOffset::Rotate { index, jitter } = offset else {
                panic!("strategy changed");
            };
            assert!((0..=2).contains(&jitter.0) && (0..=2).contains(&jitter.1));
            seen.push(index);
        }
        assert_eq!(seen, vec![1, 2, 3, 4, 0]);
    }

    #[test]
    fn zero_jitter_stays_put() {
        let layout = LayoutConfig { jitter: 0, ..LayoutConfig::default() };
        let mut rng = fastrand::Rng::with_seed(1);
        let mut offset = LayoutOffset::initial(Strategy::Rotate);
        offset.advance(&layout, 64, &mut rng);
        assert_eq!(offset, LayoutOffset::Rotate { index: 1, jitter: (0, 0) });
    }

    #[test]
    fn huge_values_do_not_overflow() {
        let layout = LayoutConfig {
            scroll_step: u32::MAX,
            jitter: u32::MAX,
            line_anchors: vec![u32::MAX],
            ..LayoutConfig::default()
        };
        let mut rng = fastrand::Rng::with_seed(3);

        let mut offset = LayoutOffset::Scroll { y: u32::MAX };
        offset.advance(&layout, 64, &mut rng);
        // (2^33 - 2) % 64
        assert_eq!(offset, LayoutOffset::Scroll { y: 62 });
        // (2^32 - 1) * 2 + 62 wraps to 60, whose 8px bar crosses the bottom edge.
        assert_eq!(offset.origins(&layout, 0, u32::MAX, 8, 64), vec![(0, 60), (0, -4)]);

        let mut offset = LayoutOffset::initial(Strategy::Rotate);
        offset.advance(&layout, 64, &mut rng);
        let LayoutOffset::Rotate { jitter, .. } = offset else {
            panic!("strategy changed");
        };
        assert!(jitter.0 >= 0 && jitter.1 >= 0);
    }

    #[test]
    fn bar_origin_includes_top_margin_and_wrap() {
        let layout = LayoutConfig::default();
        let offset = LayoutOffset::Scroll { y: 40 };
        // CPU bar: (13 + 3 + 40) % 64 = 56, 56 + 8 >= 64.
        assert_eq!(offset.origins(&layout, 1, 3, 8, 64), vec![(0, 56), (0, -8)]);
        // Temp text: 0 + 40 = 40, 40 + 12 < 64.
        assert_eq!(offset.origins(&layout, 0, 0, 12, 64), vec![(0, 40)]);
    }
}
