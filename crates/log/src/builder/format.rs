//! Format layer creation macros

/// Applies the shared [`DisplayConfig`](crate::DisplayConfig) options to a
/// `fmt` layer, points it at stderr and boxes it.
///
/// Timestamps change the layer's type, so both branches are boxed.
macro_rules! fmt_layer {
    ($layer:expr, $display:expr) => {{
        let layer = $layer
            .with_writer(std::io::stderr)
            .with_ansi($display.colors)
            .with_target($display.target)
            .with_file($display.source)
            .with_line_number($display.source)
            .with_thread_ids($display.thread_ids)
            .with_thread_names($display.thread_names);

        if $display.time {
            layer.boxed()
        } else {
            layer.without_time().boxed()
        }
    }};
}
