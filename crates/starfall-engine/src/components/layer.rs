/// Render layer: the order in which the scene is drawn.
///
/// Layers are drawn back-to-front: Nebula first, Debris last.
/// Canvases may ignore them; the recording canvas keeps them so the
/// draw stream can be inspected per layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(u8)]
pub enum RenderLayer {
    #[default]
    Nebula = 0,
    Stars = 1,
    Singularity = 2,
    Bodies = 3,
    Explosions = 4,
    Debris = 5,
}

impl RenderLayer {
    pub const COUNT: usize = 6;

    /// All layers in draw order.
    pub const ALL: [RenderLayer; Self::COUNT] = [
        Self::Nebula,
        Self::Stars,
        Self::Singularity,
        Self::Bodies,
        Self::Explosions,
        Self::Debris,
    ];

    /// Layer stored in a draw command, if the index is known.
    pub fn from_u8(value: u8) -> Option<Self> {
        Self::ALL.get(value as usize).copied()
    }

    pub fn as_u8(self) -> u8 {
        self as u8
    }

    /// Layers holding simulated entities, as opposed to scenery.
    pub fn is_entity(self) -> bool {
        self != RenderLayer::Singularity
    }
}
