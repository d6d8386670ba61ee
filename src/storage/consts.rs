pub const PLOT_ID_LENGTH: usize = 8;
