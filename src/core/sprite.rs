//! Entity data: sprites and their specializations.

/// Image handle owned by `render::textures::TextureManager`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TextureKey {
    Player,
    Enemy,
    Cauldron,
    Tileset,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Sprite {
    pub texture: TextureKey,
    pub x: f32,
    pub y: f32,
}

impl Sprite {
    pub fn new(texture: TextureKey, x: f32, y: f32) -> Self {
        Self { texture, x, y }
    }

    #[inline]
    pub fn position(&self) -> (f32, f32) {
        (self.x, self.y)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Enemy {
    pub sprite: Sprite,
    /// When false the enemy is ambient and never moves.
    pub follows_player: bool,
}

impl Enemy {
    pub fn new(x: f32, y: f32, follows_player: bool) -> Self {
        Self {
            sprite: Sprite::new(TextureKey::Enemy, x, y),
            follows_player,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Cauldron {
    pub sprite: Sprite,
}

impl Cauldron {
    pub fn new(x: f32, y: f32) -> Self {
        Self { sprite: Sprite::new(TextureKey::Cauldron, x, y) }
    }
}
