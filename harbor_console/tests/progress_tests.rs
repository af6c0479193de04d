#[cfg(test)]
mod progress_tests {
    use indicatif::ProgressDrawTarget;

    use harbor_console::{
        ConsoleRenderer, IndicatifProgressBar, ProgressContext, QuietProgressBar,
    };
    use harbor_plugin::{Error, HostContext, OutputSink, ProgressBar, RenderContext, ReporterRenderer};

    fn hidden_context() -> RenderContext {
        Box::new(ProgressContext::with_draw_target(ProgressDrawTarget::hidden()))
    }

    #[test]
    fn progress_context_builder_yields_a_matching_context() {
        let context = harbor_console::progress_context();

        // The backend must be able to find its own context in the set the
        // host passes back.
        assert!(context.downcast_ref::<ProgressContext>().is_some());
    }

    #[test]
    fn quiet_progress_bar_emits_one_line_on_construction() {
        let sink = OutputSink::memory();
        let mut bar = QuietProgressBar::new("ripgrep-14.1.0", &sink).unwrap();

        assert_eq!(sink.contents().unwrap(), "...downloading ripgrep-14.1.0...\n");

        // Subsequent calls never touch the sink
        bar.update_to(0.5);
        bar.refresh();
        bar.update_to(1.0);
        bar.close();

        assert_eq!(sink.contents().unwrap(), "...downloading ripgrep-14.1.0...\n");
        assert!(!bar.is_visible());
    }

    #[test]
    fn indicatif_progress_bar_hides_itself_at_completion() {
        let contexts = vec![hidden_context()];
        let mut bar = IndicatifProgressBar::new("fetch", &contexts).unwrap();

        assert!(bar.is_visible());
        bar.update_to(0.5);
        bar.refresh();
        assert!(bar.is_visible());

        bar.update_to(1.0);
        assert!(!bar.is_visible());

        bar.close();
        assert!(!bar.is_visible());
    }

    #[test]
    fn missing_render_context_is_a_configuration_error() {
        let unrelated: Vec<RenderContext> = vec![Box::new(42_u64), Box::new(String::new())];

        let err = IndicatifProgressBar::new("fetch", &unrelated).unwrap_err();
        assert!(matches!(err, Error::MissingProgressContext { backend: "indicatif" }));

        let err = IndicatifProgressBar::new("fetch", &[]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "indicatif is configured, but there is no progress bar available"
        );
    }

    #[test]
    fn renderer_selects_the_quiet_bar_when_quiet_is_set() {
        let context = HostContext {
            quiet: true,
            ..HostContext::default()
        };
        let sink = OutputSink::memory();

        let bar = ConsoleRenderer::new()
            .progress_bar("fetch", sink.clone(), &context, &[])
            .unwrap();

        // The quiet bar needs no render context and announces itself once
        assert!(!bar.is_visible());
        assert_eq!(sink.contents().unwrap(), "...downloading fetch...\n");
    }

    #[test]
    fn renderer_selects_the_indicatif_bar_otherwise() {
        let context = HostContext::default();
        let contexts = vec![hidden_context()];

        let bar = ConsoleRenderer::new()
            .progress_bar("fetch", OutputSink::memory(), &context, &contexts)
            .unwrap();

        assert!(bar.is_visible());
    }

    #[test]
    fn renderer_without_context_propagates_the_configuration_error() {
        let context = HostContext::default();

        let result = ConsoleRenderer::new().progress_bar("fetch", OutputSink::memory(), &context, &[]);

        assert!(matches!(
            result.unwrap_err(),
            Error::MissingProgressContext { .. }
        ));
    }

    #[test]
    fn a_full_download_cycle_leaves_no_visible_bars() {
        let contexts = vec![hidden_context()];
        let names = ["ripgrep", "fd", "bat"];

        let mut bars: Vec<IndicatifProgressBar> = names
            .iter()
            .map(|name| IndicatifProgressBar::new(name, &contexts).unwrap())
            .collect();

        for step in 1..=4 {
            for bar in &mut bars {
                bar.update_to(f64::from(step) / 4.0);
                bar.refresh();
            }
        }
        for bar in &mut bars {
            bar.close();
        }

        assert!(bars.iter().all(|bar| !bar.is_visible()));
    }
}
