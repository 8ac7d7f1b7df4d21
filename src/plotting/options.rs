//! Configuration of contour plot generation

/// Configuration of a [`ContourPlot`][super::ContourPlot].
#[derive(Clone, Debug)]
pub struct ContourOptions {
    /// The number of contour bands to quantize the surface into. Default value is `100`.
    pub levels: usize,
    /// The width of the plot image in pixels. Default value is `800`.
    pub width: u32,
    /// The height of the plot image in pixels. Default value is `800`.
    pub height: u32,
    /// The caption drawn above the plot. Default is empty (no caption).
    pub title: String,
    /// The label of the x-axis. Default value is `"x"`.
    pub x_label: String,
    /// The label of the y-axis. Default value is `"y"`.
    pub y_label: String,
}

impl ContourOptions {
    /// Creates a new `ContourOptions` with default values. Set individual options using the
    /// provided methods.
    pub fn new() -> Self {
        Self {
            levels: 100,
            width: 800,
            height: 800,
            title: String::new(),
            x_label: "x".to_owned(),
            y_label: "y".to_owned(),
        }
    }

    /// Changes the number of contour bands from the default value (must be at least 1).
    pub fn levels(mut self, levels: usize) -> Self {
        self.levels = levels;
        self
    }

    /// Changes the image dimensions from the default value.
    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Sets the plot caption.
    pub fn title(mut self, title: &str) -> Self {
        self.title = title.to_owned();
        self
    }

    /// Changes the x-axis label from the default value.
    pub fn x_label(mut self, x_label: &str) -> Self {
        self.x_label = x_label.to_owned();
        self
    }

    /// Changes the y-axis label from the default value.
    pub fn y_label(mut self, y_label: &str) -> Self {
        self.y_label = y_label.to_owned();
        self
    }
}

impl Default for ContourOptions {
    fn default() -> Self {
        Self::new()
    }
}
