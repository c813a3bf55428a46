//! Block contents and per-block exploration flags.

use std::fmt;

/// The six ore kinds a sample can contain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum OreKind {
    /// Coal ore.
    Coal,
    /// Iron ore.
    Iron,
    /// Gold ore.
    Gold,
    /// Diamond ore.
    Diamond,
    /// Redstone ore.
    Redstone,
    /// Lapis lazuli ore.
    Lapis,
}

impl OreKind {
    /// Every ore kind, in generation order.
    pub const ALL: [OreKind; 6] = [
        OreKind::Coal,
        OreKind::Iron,
        OreKind::Gold,
        OreKind::Redstone,
        OreKind::Diamond,
        OreKind::Lapis,
    ];

    /// Single-character glyph used by debug renderings.
    pub const fn glyph(self) -> char {
        match self {
            OreKind::Coal => 'C',
            OreKind::Iron => 'I',
            OreKind::Gold => 'G',
            OreKind::Diamond => 'D',
            OreKind::Redstone => 'R',
            OreKind::Lapis => 'L',
        }
    }
}

impl fmt::Display for OreKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OreKind::Coal => "coal",
            OreKind::Iron => "iron",
            OreKind::Gold => "gold",
            OreKind::Diamond => "diamond",
            OreKind::Redstone => "redstone",
            OreKind::Lapis => "lapis",
        };
        f.write_str(name)
    }
}

/// What a block is made of.
///
/// A block is *dug* iff it is [`BlockType::Air`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum BlockType {
    /// An empty (dug) block.
    Air,
    /// Plain stone.
    #[default]
    Stone,
    /// An ore block of the given kind.
    Ore(OreKind),
}

impl BlockType {
    /// Whether this block has been dug.
    pub const fn is_dug(self) -> bool {
        matches!(self, BlockType::Air)
    }

    /// Whether this block is an ore of any kind.
    pub const fn is_ore(self) -> bool {
        matches!(self, BlockType::Ore(_))
    }

    /// Single-character glyph used by debug renderings.
    pub const fn glyph(self) -> char {
        match self {
            BlockType::Air => '.',
            BlockType::Stone => '#',
            BlockType::Ore(kind) => kind.glyph(),
        }
    }

    /// Stable byte tag, used for content fingerprints.
    pub const fn tag(self) -> u8 {
        match self {
            BlockType::Air => 0,
            BlockType::Stone => 1,
            BlockType::Ore(OreKind::Coal) => 2,
            BlockType::Ore(OreKind::Iron) => 3,
            BlockType::Ore(OreKind::Gold) => 4,
            BlockType::Ore(OreKind::Diamond) => 5,
            BlockType::Ore(OreKind::Redstone) => 6,
            BlockType::Ore(OreKind::Lapis) => 7,
        }
    }
}

impl fmt::Display for BlockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlockType::Air => f.write_str("air"),
            BlockType::Stone => f.write_str("stone"),
            BlockType::Ore(kind) => write!(f, "{kind} ore"),
        }
    }
}

/// A single cell of a sample: its content plus the flags the explorer
/// derives from the surrounding dug blocks.
///
/// The flags are scratch state. They only mean something after an
/// exploration pass over the owning sample.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Block {
    /// What the block is made of.
    pub kind: BlockType,
    /// The block is dug or touches a dug block reached by exploration.
    pub visible: bool,
    /// A player's head can be in this block.
    pub head_accessible: bool,
    /// A player's feet can be in this block.
    pub feet_accessible: bool,
    /// The exploration pass has already visited this block.
    pub explored: bool,
}

impl Block {
    /// A fresh block of the given kind with all flags cleared.
    pub const fn new(kind: BlockType) -> Self {
        Self {
            kind,
            visible: false,
            head_accessible: false,
            feet_accessible: false,
            explored: false,
        }
    }

    /// Whether this block has been dug.
    pub const fn is_dug(&self) -> bool {
        self.kind.is_dug()
    }

    /// Whether this block is an ore of any kind.
    pub const fn is_ore(&self) -> bool {
        self.kind.is_ore()
    }
}
