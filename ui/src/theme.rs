use serde::{Deserialize, Serialize};

///////////////////////////////////////////////////////////////
// Types //
///////////////////////////////////////////////////////////////

/// Read-only palette and spacing tokens. Views take a `&Theme` rather
/// than hard coding colors, so tests can hand them a stub.
#[derive(Clone, Debug, PartialEq)]
pub struct Theme {
    pub name: ThemeName,
    pub fill: Fill,
    pub stroke: Stroke,
    pub text: Text,
    pub accent: &'static str,
    pub critical: &'static str,
    pub success: &'static str,
    pub spacing_unit_px: f32,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThemeName {
    Dark,
    Light,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Fill {
    pub base: &'static str,
    pub dark: &'static str,
    pub faint: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Stroke {
    pub muted: &'static str,
    pub faint: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Text {
    pub base: &'static str,
    pub muted: &'static str,
}

/// How much a surface should stand out.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Variant {
    Neutral,
    Primary,
    Secondary,
    Accent,
    Critical,
    Success,
}

pub const ALL_VARIANTS: [Variant; 6] = [
    Variant::Neutral,
    Variant::Primary,
    Variant::Secondary,
    Variant::Accent,
    Variant::Critical,
    Variant::Success,
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VariantColors {
    pub background: &'static str,
    pub text: &'static str,
}

///////////////////////////////////////////////////////////////
// Api //
///////////////////////////////////////////////////////////////

impl Default for ThemeName {
    fn default() -> ThemeName {
        ThemeName::Dark
    }
}

impl ThemeName {
    pub fn theme(self) -> Theme {
        match self {
            ThemeName::Dark => Theme::dark(),
            ThemeName::Light => Theme::light(),
        }
    }

    pub fn toggle(self) -> ThemeName {
        match self {
            ThemeName::Dark => ThemeName::Light,
            ThemeName::Light => ThemeName::Dark,
        }
    }
}

impl Variant {
    pub fn label(self) -> &'static str {
        match self {
            Variant::Neutral => "neutral",
            Variant::Primary => "primary",
            Variant::Secondary => "secondary",
            Variant::Accent => "accent",
            Variant::Critical => "critical",
            Variant::Success => "success",
        }
    }

    /// The variant after this one in `ALL_VARIANTS`, wrapping around.
    pub fn next(self) -> Variant {
        let index = ALL_VARIANTS
            .iter()
            .position(|variant| *variant == self)
            .unwrap_or(0);

        ALL_VARIANTS[(index + 1) % ALL_VARIANTS.len()]
    }
}

impl Default for Theme {
    fn default() -> Theme {
        Theme::dark()
    }
}

impl Theme {
    pub fn dark() -> Theme {
        Theme {
            name: ThemeName::Dark,
            fill: Fill {
                base: "#fff",
                dark: "#1c1c1c",
                faint: "rgba(255, 255, 255, 0.12)",
            },
            stroke: Stroke {
                muted: "rgba(255, 255, 255, 0.48)",
                faint: "rgba(255, 255, 255, 0.24)",
            },
            text: Text {
                base: "#fff",
                muted: "rgba(255, 255, 255, 0.7)",
            },
            accent: "#8f33d6",
            critical: "#ea3f3f",
            success: "#1db954",
            spacing_unit_px: 8.0,
        }
    }

    pub fn light() -> Theme {
        Theme {
            name: ThemeName::Light,
            fill: Fill {
                base: "#000",
                dark: "#e0e0e0",
                faint: "rgba(0, 0, 0, 0.04)",
            },
            stroke: Stroke {
                muted: "rgba(0, 0, 0, 0.6)",
                faint: "rgba(0, 0, 0, 0.12)",
            },
            text: Text {
                base: "#000",
                muted: "rgba(0, 0, 0, 0.6)",
            },
            accent: "#8f33d6",
            critical: "#ea3f3f",
            success: "#1db954",
            spacing_unit_px: 8.0,
        }
    }

    pub fn background(&self) -> &'static str {
        match self.name {
            ThemeName::Dark => "#000",
            ThemeName::Light => "#fff",
        }
    }

    /// Every factor is scaled by the spacing unit, like css shorthand:
    /// `spacing(&[1.5, 2.0])` is `"12px 16px"` with an 8px unit.
    pub fn spacing(&self, factors: &[f32]) -> String {
        factors
            .iter()
            .map(|factor| {
                let mut buf = (factor * self.spacing_unit_px).to_string();
                buf.push_str("px");
                buf
            })
            .collect::<Vec<String>>()
            .join(" ")
    }

    pub fn variant_colors(&self, variant: Variant) -> VariantColors {
        match variant {
            Variant::Neutral => VariantColors {
                background: self.fill.dark,
                text: self.text.base,
            },
            Variant::Primary => VariantColors {
                background: self.fill.base,
                text: self.background(),
            },
            Variant::Secondary => VariantColors {
                background: self.fill.faint,
                text: self.text.base,
            },
            Variant::Accent => VariantColors {
                background: self.accent,
                text: "#fff",
            },
            Variant::Critical => VariantColors {
                background: self.critical,
                text: "#fff",
            },
            Variant::Success => VariantColors {
                background: self.success,
                text: "#fff",
            },
        }
    }
}

#[cfg(test)]
mod test_theme {
    use crate::theme::{Theme, ThemeName, Variant, ALL_VARIANTS};
    use pretty_assertions::assert_eq;

    #[test]
    fn spacing_scales_each_factor() {
        assert_eq!("12px 16px", Theme::dark().spacing(&[1.5, 2.0]));
    }

    #[test]
    fn spacing_uses_the_theme_unit() {
        let mut theme = Theme::light();
        theme.spacing_unit_px = 4.0;

        assert_eq!("4px", theme.spacing(&[1.0]));
    }

    #[test]
    fn toggling_twice_is_identity() {
        assert_eq!(ThemeName::Dark, ThemeName::Dark.toggle().toggle());
        assert_eq!(ThemeName::Light, ThemeName::Dark.toggle());
    }

    #[test]
    fn next_variant_cycles_through_all() {
        let mut variant = Variant::Success;
        let mut seen = Vec::new();

        for _ in 0..ALL_VARIANTS.len() {
            variant = variant.next();
            seen.push(variant);
        }

        assert_eq!(ALL_VARIANTS.to_vec(), seen);
    }

    #[test]
    fn primary_text_contrasts_with_fill() {
        let theme = Theme::dark();
        let colors = theme.variant_colors(Variant::Primary);

        assert_eq!(theme.fill.base, colors.background);
        assert_eq!("#000", colors.text);
    }
}
