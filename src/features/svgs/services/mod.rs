mod svg_service;

pub use svg_service::SvgService;
