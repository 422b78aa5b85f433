mod api;
mod client_utils;
mod errors;
mod gallery;
pub mod google;
mod image_service;
mod normalize;
pub mod openai;
mod resolver;
mod urls;

pub mod avenir_sdk_test;

pub use api::*;
pub use errors::*;
pub use gallery::{
    GalleryPager, GalleryPagerOptions, PaginationCursor, DEFAULT_MAX_PAGES, DEFAULT_PAGE_SIZE,
    WALK_PAGE_SIZE,
};
pub use image_service::{ImageService, API_URL_ENV, DEFAULT_BASE_URL};
pub use resolver::{resolve_image_url, ResolveOptions};
