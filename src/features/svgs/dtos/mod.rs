mod svg_dto;

pub use svg_dto::{
    DeleteSvgResponseDto, SearchSvgsQuery, SvgRecordDto, UpdateSvgDto, UploadSvgDto, MAX_SVG_SIZE,
};
