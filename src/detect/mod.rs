pub mod blob;
pub mod hough;
pub mod hsv;
pub mod locator;
pub mod morph;
