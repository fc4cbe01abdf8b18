pub mod svgs;
