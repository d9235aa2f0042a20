/// Piece shapes. The rhombus is the royal piece; the rest carry material value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    Rhombus,
    Triangle,
    Hexagon,
    Circle,
    Square,
}

impl TryFrom<&str> for Shape {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rhombus" => Ok(Self::Rhombus),
            "triangle" => Ok(Self::Triangle),
            "hexagon" => Ok(Self::Hexagon),
            "circle" => Ok(Self::Circle),
            "square" => Ok(Self::Square),
            _ => Err(format!("unknown piece type '{}'", s)),
        }
    }
}

impl std::fmt::Display for Shape {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Rhombus => write!(f, "rhombus"),
            Self::Triangle => write!(f, "triangle"),
            Self::Hexagon => write!(f, "hexagon"),
            Self::Circle => write!(f, "circle"),
            Self::Square => write!(f, "square"),
        }
    }
}
