//! Extended Graphics State (ExtGState) for transparency.
//!
//! Opacity cannot be set with a plain content stream operator; it lives in
//! an ExtGState resource that the page references by name with `gs`.
//!
//! # Example
//!
//! ```ignore
//! use pdf_formkit::writer::ExtGStateBuilder;
//!
//! let gs = ExtGStateBuilder::new().fill_alpha(0.2);
//! assert_eq!(gs.resource_name(), "GSf20");
//! let dict = gs.build();
//! ```

use crate::object::Object;
use std::collections::HashMap;

/// Builder for Extended Graphics State dictionaries.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExtGStateBuilder {
    /// Fill alpha (ca) - 0.0 to 1.0
    fill_alpha: Option<f32>,
    /// Stroke alpha (CA) - 0.0 to 1.0
    stroke_alpha: Option<f32>,
}

impl ExtGStateBuilder {
    /// Create a new ExtGState builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set fill alpha (opacity for fill operations, which includes text).
    ///
    /// Value is clamped to 0.0 (fully transparent) ..= 1.0 (fully opaque).
    pub fn fill_alpha(mut self, alpha: f32) -> Self {
        self.fill_alpha = Some(alpha.clamp(0.0, 1.0));
        self
    }

    /// Set stroke alpha (opacity for stroke operations).
    pub fn stroke_alpha(mut self, alpha: f32) -> Self {
        self.stroke_alpha = Some(alpha.clamp(0.0, 1.0));
        self
    }

    /// Set both fill and stroke alpha to the same value.
    pub fn alpha(self, alpha: f32) -> Self {
        self.fill_alpha(alpha).stroke_alpha(alpha)
    }

    /// Deterministic resource name, so equal states share one resource.
    ///
    /// Whole percentages are spelled out: fill 0.2 gives `GSf20`, stroke 1.0
    /// gives `GSs100`, both together `GSf20s100`. Any other alpha is keyed on
    /// its exact bits (`GSsx3f010625` for 0.504), so distinct values never
    /// share a name.
    pub fn resource_name(&self) -> String {
        let mut name = String::from("GS");
        if let Some(alpha) = self.fill_alpha {
            name.push('f');
            name.push_str(&alpha_key(alpha));
        }
        if let Some(alpha) = self.stroke_alpha {
            name.push('s');
            name.push_str(&alpha_key(alpha));
        }
        name
    }

    /// Build the ExtGState dictionary as a PDF Object.
    pub fn build(&self) -> Object {
        let mut dict: HashMap<String, Object> = HashMap::new();
        dict.insert("Type".to_string(), Object::Name("ExtGState".to_string()));

        if let Some(alpha) = self.fill_alpha {
            dict.insert("ca".to_string(), Object::Real(alpha as f64));
        }
        if let Some(alpha) = self.stroke_alpha {
            dict.insert("CA".to_string(), Object::Real(alpha as f64));
        }

        Object::Dictionary(dict)
    }
}

fn alpha_key(alpha: f32) -> String {
    let percent = (alpha * 100.0).round();
    if percent / 100.0 == alpha {
        format!("{}", percent as u32)
    } else {
        format!("x{:08x}", alpha.to_bits())
    }
}
