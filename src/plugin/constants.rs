//! Naming conventions the enclosure library follows on the canvas.

// Component names of enclosures contain this keyword.
pub const ENCLOSURE_KEYWORD: &str = "enclosure";
// Instances with these words in their name are parts of an enclosure, not enclosures.
pub const EXCLUDED_PART_KEYWORDS: [&str; 2] = ["drivetray", "chassis"];

// A handle's component head sits this many levels below its enclosure instance.
pub const ENCLOSURE_ANCESTOR_DEPTH: usize = 3;
// Tray component heads are named `drivetray-slot <n>`; the slot is the second word.
pub const SLOT_NAME_SEPARATOR: char = ' ';

// Theme changes are forwarded to the UI tagged with this source.
pub const THEME_SOURCE: &str = "penpot";
pub const THEME_CHANGE_TYPE: &str = "themechange";

// A slot selection is only plausible when its numbers add up to more than this.
pub const MIN_SLOT_SUM: i64 = 2;
// Largest number of slots a dash range may expand to.
pub const MAX_SLOT_COUNT: usize = 256;
