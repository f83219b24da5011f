//! Color tokens for theming

/// RGBA color with components in 0.0..=1.0
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgba(1.0, 1.0, 1.0, 1.0);

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from a 0xRRGGBB literal
    pub fn from_hex(hex: u32) -> Self {
        Self::rgba(
            ((hex >> 16) & 0xFF) as f32 / 255.0,
            ((hex >> 8) & 0xFF) as f32 / 255.0,
            (hex & 0xFF) as f32 / 255.0,
            1.0,
        )
    }

    /// CSS value: `#rrggbb` when opaque, `rgba(...)` otherwise
    pub fn to_css(&self) -> String {
        let channel = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        if self.a < 1.0 {
            format!(
                "rgba({},{},{},{})",
                channel(self.r),
                channel(self.g),
                channel(self.b),
                self.a
            )
        } else {
            format!(
                "#{:02x}{:02x}{:02x}",
                channel(self.r),
                channel(self.g),
                channel(self.b)
            )
        }
    }
}

/// Semantic color token keys for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum ColorToken {
    Background,
    Surface,
    SurfaceElevated,
    TextPrimary,
    TextSecondary,
    TextMuted,
    Primary,
    Accent,
    ChipBackground,
    ChipText,
    Border,
}

impl ColorToken {
    pub const ALL: [ColorToken; 11] = [
        ColorToken::Background,
        ColorToken::Surface,
        ColorToken::SurfaceElevated,
        ColorToken::TextPrimary,
        ColorToken::TextSecondary,
        ColorToken::TextMuted,
        ColorToken::Primary,
        ColorToken::Accent,
        ColorToken::ChipBackground,
        ColorToken::ChipText,
        ColorToken::Border,
    ];

    /// CSS custom property name (without the `--` prefix)
    pub fn css_name(self) -> &'static str {
        match self {
            ColorToken::Background => "background",
            ColorToken::Surface => "surface",
            ColorToken::SurfaceElevated => "surface-elevated",
            ColorToken::TextPrimary => "text-primary",
            ColorToken::TextSecondary => "text-secondary",
            ColorToken::TextMuted => "text-muted",
            ColorToken::Primary => "primary",
            ColorToken::Accent => "accent",
            ColorToken::ChipBackground => "chip-bg",
            ColorToken::ChipText => "chip-text",
            ColorToken::Border => "border",
        }
    }
}

/// Complete set of semantic color tokens for one scheme
#[derive(Clone, Debug, PartialEq)]
pub struct ColorTokens {
    pub background: Color,
    pub surface: Color,
    pub surface_elevated: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,
    pub primary: Color,
    pub accent: Color,
    pub chip_background: Color,
    pub chip_text: Color,
    pub border: Color,
}

impl ColorTokens {
    pub fn light() -> Self {
        Self {
            background: Color::WHITE,
            surface: Color::from_hex(0xF9FAFB),
            surface_elevated: Color::WHITE,
            text_primary: Color::from_hex(0x111827),
            text_secondary: Color::from_hex(0x374151),
            text_muted: Color::from_hex(0x4B5563),
            primary: Color::from_hex(0x2563EB),
            accent: Color::from_hex(0x3B82F6),
            chip_background: Color::from_hex(0xDBEAFE),
            chip_text: Color::from_hex(0x1E40AF),
            border: Color::from_hex(0xE5E7EB),
        }
    }

    pub fn dark() -> Self {
        Self {
            background: Color::from_hex(0x111827),
            surface: Color::from_hex(0x1F2937),
            surface_elevated: Color::from_hex(0x111827),
            text_primary: Color::WHITE,
            text_secondary: Color::from_hex(0xD1D5DB),
            text_muted: Color::from_hex(0x9CA3AF),
            primary: Color::from_hex(0x60A5FA),
            accent: Color::from_hex(0x60A5FA),
            chip_background: Color::from_hex(0x1E3A8A),
            chip_text: Color::from_hex(0xBFDBFE),
            border: Color::from_hex(0x374151),
        }
    }

    pub fn get(&self, token: ColorToken) -> Color {
        match token {
            ColorToken::Background => self.background,
            ColorToken::Surface => self.surface,
            ColorToken::SurfaceElevated => self.surface_elevated,
            ColorToken::TextPrimary => self.text_primary,
            ColorToken::TextSecondary => self.text_secondary,
            ColorToken::TextMuted => self.text_muted,
            ColorToken::Primary => self.primary,
            ColorToken::Accent => self.accent,
            ColorToken::ChipBackground => self.chip_background,
            ColorToken::ChipText => self.chip_text,
            ColorToken::Border => self.border,
        }
    }
}
