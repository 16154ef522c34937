//! HTML+CSS grid output.
//!
//! Emits a stylesheet plus one grid-placed cell element per non-background
//! sample. Background cells are omitted entirely; the container's
//! `background-color` fills them, which keeps the element count proportional
//! to the foreground instead of the whole grid.

use std::collections::HashMap;

use crate::colour::Colour;
use crate::error::{PxGridError, Result};
use crate::sampler::Sampler;
use crate::source::PixelSource;

/// Colour class registry for the stylesheet.
///
/// Assigns each distinct colour a stable class name in first-encounter
/// order. The background is registered first even though no cell element
/// references it; its rule documents the container fill.
#[derive(Debug, Default)]
pub struct ClassTable {
    by_colour: HashMap<Colour, usize>,
    entries: Vec<(Colour, String)>,
}

impl ClassTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a colour, returning its class name. Registering a colour
    /// again returns the existing name.
    pub fn register(&mut self, colour: Colour) -> &str {
        let index = match self.by_colour.get(&colour) {
            Some(&index) => index,
            None => {
                let index = self.entries.len();
                self.by_colour.insert(colour, index);
                self.entries.push((colour, colour.class_name()));
                index
            }
        };
        &self.entries[index].1
    }

    /// Number of distinct colours registered.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no colour has been registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Registered colours with their class names, in first-encounter order.
    pub fn entries(&self) -> impl Iterator<Item = (Colour, &str)> + '_ {
        self.entries.iter().map(|(c, name)| (*c, name.as_str()))
    }
}

/// Render the sampled grid as a self-contained HTML fragment.
///
/// The fragment holds a `<style>` block (reset, sized container grid with the
/// background fill, shared cell rule with a hover affordance, one fill rule
/// per distinct colour) followed by the container element with one placed
/// `div` per foreground cell. Output is byte-identical across runs for
/// identical inputs.
///
/// # Errors
///
/// `InvalidPixelSize` if `pixel_size` is zero. Validated before sampling.
pub fn render_html<S: PixelSource>(
    sampler: &Sampler<'_, S>,
    pixel_size: u32,
    background: Colour,
) -> Result<String> {
    if pixel_size == 0 {
        return Err(PxGridError::InvalidPixelSize { value: pixel_size });
    }

    let sampled_width = sampler.sampled_width();
    let sampled_height = sampler.sampled_height();

    let mut classes = ClassTable::new();
    classes.register(background);

    // One placed element per non-background cell, row-major. Placement is
    // 1-indexed because CSS grid lines start at 1.
    let mut cells = String::new();
    for sample in sampler.samples() {
        if sample.colour == background {
            continue;
        }
        let class_name = classes.register(sample.colour);
        cells.push_str(&format!(
            "<div class=\"pixel {}\" style=\"grid-row: {}; grid-column: {};\"></div>",
            class_name,
            sample.grid_row + 1,
            sample.grid_col + 1
        ));
    }

    let mut rules: Vec<String> = vec![
        "* { margin: 0; padding: 0; box-sizing: border-box; }".to_string(),
        format!(
            ".image-container {{ display: grid; width: {}px; height: {}px; \
             grid-template-columns: repeat({}, {}px); \
             grid-template-rows: repeat({}, {}px); background-color: {}; }}",
            sampled_width * pixel_size,
            sampled_height * pixel_size,
            sampled_width,
            pixel_size,
            sampled_height,
            pixel_size,
            background
        ),
        format!(
            ".pixel {{ width: {}px; height: {}px; \
             transition: transform 0.2s ease, opacity 0.3s ease; }}",
            pixel_size, pixel_size
        ),
        ".pixel:hover { transform: scale(1.5); z-index: 10; opacity: 0.9 !important; \
         box-shadow: 0 0 5px rgba(255,255,255,0.5); }"
            .to_string(),
    ];
    for (colour, name) in classes.entries() {
        rules.push(format!(".{} {{ background-color: {}; }}", name, colour));
    }

    Ok(format!(
        "<style>\n{}\n</style>\n<div class=\"image-container\">{}</div>",
        rules.join(""),
        cells
    ))
}
