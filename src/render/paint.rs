/// Straight-alpha RGBA8 color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub(crate) fn to_cpu(self) -> vello_cpu::peniko::Color {
        vello_cpu::peniko::Color::from_rgba8(self.r, self.g, self.b, self.a)
    }
}

pub const WHITE: Rgba8 = Rgba8::rgb(255, 255, 255);
pub const BLACK: Rgba8 = Rgba8::rgb(0, 0, 0);
pub const ORANGE: Rgba8 = Rgba8::rgb(255, 165, 0);
pub const DARK_ORANGE: Rgba8 = Rgba8::rgb(255, 140, 0);
pub const GOLD: Rgba8 = Rgba8::rgb(255, 215, 0);
pub const HEART_RED: Rgba8 = Rgba8::rgb(230, 40, 70);
pub const COIN_EDGE: Rgba8 = Rgba8::rgb(184, 134, 11);
pub const DIE_FACE: Rgba8 = Rgba8::rgb(250, 250, 250);
pub const BADGE: Rgba8 = Rgba8::rgb(255, 255, 255);
