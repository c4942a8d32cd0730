//! Five-character-take placement rules.
//!
//! A line is first classified into a [`PlacementRule`] from its character
//! count and space structure, then the rule is turned into one
//! [`PlacementInstruction`] per non-space character. With the slot edges
//! `L`, `R` and center `C`:
//!
//! | chars | structure            | placement                                   |
//! |-------|----------------------|---------------------------------------------|
//! | 1     |                      | centered on `C`                             |
//! | 2     |                      | first starts at `L`, second ends at `R`     |
//! | 3     | one space            | middle glyph leans toward the shorter part  |
//! | 3     | otherwise            | middle glyph centered on `C`                |
//! | 4     | one space, 2+2       | pinned ends, interior at thirds             |
//! | 4     | one space, 1+3 / 3+1 | full-width space inserted, laid out as 5    |
//! | 4, 5  | otherwise            | leftover margin spread evenly               |
//! | 6+    |                      | compressed horizontally, centered           |

use log::debug;

use crate::font::FontMetrics;
use crate::model::{Anchor, NameTokens, PlacementInstruction, SlotMetrics, IDEOGRAPHIC_SPACE};

/// Fixed gap between compressed glyphs.
pub const SPACER_UNIT: f64 = 1.0;

/// Which way the middle glyph of a three-character name is pulled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MiddleBias {
    /// Family name is shorter ("田 一郎"): glyph starts at `C`.
    Right,
    /// Given name is shorter ("四条 保"): glyph ends at `C`.
    Left,
    /// No single separating space: glyph centered on `C`.
    Center,
}

impl MiddleBias {
    fn anchor(self) -> Anchor {
        match self {
            MiddleBias::Right => Anchor::Start,
            MiddleBias::Left => Anchor::End,
            MiddleBias::Center => Anchor::Middle,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementRule {
    Empty,
    Single,
    Pair,
    Triple(MiddleBias),
    /// Four characters split 2+2.
    EvenHalves,
    /// Four characters split unevenly; `split` is the length of the first part.
    PaddedHalves { split: usize },
    /// Four or five characters spread across the slot.
    Distributed,
    /// Six or more characters squeezed into the slot.
    Compressed,
}

impl PlacementRule {
    pub fn classify(tokens: &NameTokens) -> Self {
        let halves = tokens.halves();
        match tokens.char_count() {
            0 => PlacementRule::Empty,
            1 => PlacementRule::Single,
            2 => PlacementRule::Pair,
            3 => PlacementRule::Triple(match halves {
                Some((first, second)) if first < second => MiddleBias::Right,
                Some(_) => MiddleBias::Left,
                None => MiddleBias::Center,
            }),
            4 => match halves {
                Some((first, second)) if first == second => PlacementRule::EvenHalves,
                Some((first, _)) => PlacementRule::PaddedHalves { split: first },
                None => PlacementRule::Distributed,
            },
            5 => PlacementRule::Distributed,
            _ => PlacementRule::Compressed,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            PlacementRule::Empty => "empty",
            PlacementRule::Single => "single",
            PlacementRule::Pair => "pair",
            PlacementRule::Triple(_) => "triple",
            PlacementRule::EvenHalves => "even-halves",
            PlacementRule::PaddedHalves { .. } => "padded-halves",
            PlacementRule::Distributed => "distributed",
            PlacementRule::Compressed => "compressed",
        }
    }
}

/// Placement result for one line.
#[derive(Debug, Clone, PartialEq)]
pub struct LinePlacement {
    pub rule: PlacementRule,
    pub instructions: Vec<PlacementInstruction>,
}

/// Places the characters of single lines into a slot.
pub struct Typesetter<'a> {
    metrics: &'a dyn FontMetrics,
    slot: SlotMetrics,
    font_size: f64,
    min_scale: f64,
}

impl<'a> Typesetter<'a> {
    pub fn new(metrics: &'a dyn FontMetrics, slot: SlotMetrics, font_size: f64, min_scale: f64) -> Self {
        Self { metrics, slot, font_size, min_scale }
    }

    /// Place one (already trimmed) line.
    pub fn place(&self, text: &str) -> LinePlacement {
        let tokens = NameTokens::split(text);
        let rule = PlacementRule::classify(&tokens);
        debug!("{text:?}: {} chars, {} spaces -> {rule:?}", tokens.char_count(), tokens.num_spaces());
        let instructions = self.apply(rule, &tokens.merged);
        LinePlacement { rule, instructions }
    }

    fn apply(&self, rule: PlacementRule, chars: &[char]) -> Vec<PlacementInstruction> {
        let (l, r, c) = (self.slot.left(), self.slot.right(), self.slot.center());
        match (rule, chars) {
            (PlacementRule::Single, &[only]) => {
                vec![PlacementInstruction::new(only, c, Anchor::Middle)]
            }
            (PlacementRule::Pair, &[first, last]) => vec![
                PlacementInstruction::new(first, l, Anchor::Start),
                PlacementInstruction::new(last, r, Anchor::End),
            ],
            (PlacementRule::Triple(bias), &[first, middle, last]) => vec![
                PlacementInstruction::new(first, l, Anchor::Start),
                PlacementInstruction::new(middle, c, bias.anchor()),
                PlacementInstruction::new(last, r, Anchor::End),
            ],
            (PlacementRule::EvenHalves, &[first, second, third, last]) => {
                let step = (r - l) / 3.0;
                vec![
                    PlacementInstruction::new(first, l, Anchor::Start),
                    PlacementInstruction::new(second, l + step, Anchor::Middle),
                    PlacementInstruction::new(third, l + step * 2.0, Anchor::Middle),
                    PlacementInstruction::new(last, r, Anchor::End),
                ]
            }
            (PlacementRule::PaddedHalves { split }, _) => {
                let mut cells: Vec<(Option<char>, f64)> =
                    chars.iter().map(|&ch| (Some(ch), self.width(ch))).collect();
                cells.insert(split.min(cells.len()), (None, self.width(IDEOGRAPHIC_SPACE)));
                self.distribute(&cells)
            }
            (PlacementRule::Distributed, _) => {
                let cells: Vec<(Option<char>, f64)> =
                    chars.iter().map(|&ch| (Some(ch), self.width(ch))).collect();
                self.distribute(&cells)
            }
            (PlacementRule::Compressed, _) => self.compress(chars),
            _ => Vec::new(),
        }
    }

    fn width(&self, ch: char) -> f64 {
        self.metrics.advance_width(ch, self.font_size)
    }

    /// Left-anchored run from `L`: the slot width not covered by glyphs is
    /// shared equally between neighbouring cells. Empty cells take up room
    /// but draw nothing.
    fn distribute(&self, cells: &[(Option<char>, f64)]) -> Vec<PlacementInstruction> {
        let total: f64 = cells.iter().map(|(_, w)| w).sum();
        let gaps = cells.len().saturating_sub(1).max(1) as f64;
        let share = (self.slot.base_area_width - total) / gaps;

        let mut x = self.slot.left();
        let mut out = Vec::with_capacity(cells.len());
        for &(ch, w) in cells {
            if let Some(ch) = ch {
                out.push(PlacementInstruction::new(ch, x, Anchor::Start));
            }
            x += share + w;
        }
        out
    }

    /// Squeeze a long line: one horizontal scale for every glyph, never
    /// below `min_scale`, with the scaled run centered in the slot.
    fn compress(&self, chars: &[char]) -> Vec<PlacementInstruction> {
        let widths: Vec<f64> = chars.iter().map(|&ch| self.width(ch)).collect();
        let total: f64 = widths.iter().sum();
        let spacers = SPACER_UNIT * chars.len().saturating_sub(1) as f64;
        let base = self.slot.base_area_width;
        let scale = (base / (total + spacers)).max(self.min_scale);

        let mut x = self.slot.left() + 0.5 * (base - total * scale - spacers);
        let mut out = Vec::with_capacity(chars.len());
        for (&ch, w) in chars.iter().zip(&widths) {
            out.push(PlacementInstruction::scaled(ch, x, Anchor::Start, scale));
            x += SPACER_UNIT + w * scale;
        }
        out
    }
}
