pub mod svg_handler;

pub use svg_handler::{
    __path_create_svg, __path_delete_svg, __path_get_svg, __path_list_svgs, __path_search_svgs,
    __path_update_svg, create_svg, delete_svg, get_svg, list_svgs, search_svgs, update_svg,
};
