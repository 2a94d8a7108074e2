mod presenter;

pub use presenter::PixelsPresenter;
