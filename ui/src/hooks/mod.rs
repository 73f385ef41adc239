pub mod use_image_toggle;
