mod svg;

pub use svg::Svg;
