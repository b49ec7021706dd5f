mod common;

mod tests {
    use embassy_time::Instant;
    use myrtio_pixel_strip::{
        ConfigError, Duration, PixelBuffer, Protocol, Rgb, SharedStrip, ShowError, Strip,
        StripConfig, StripError, Symbol, TimingProfile, WordWidth,
    };
    use smart_leds::SmartLedsWrite;

    use super::common::{LineFault, RecordingLine, WordLine};

    const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };
    const GREEN: Rgb = Rgb { r: 0, g: 255, b: 0 };

    fn strip(num_leds: usize, mode: &str) -> Strip<RecordingLine, 8> {
        let config = StripConfig::new(num_leds).with_mode(mode);
        Strip::new(RecordingLine::default(), &config).unwrap()
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let result = Strip::<RecordingLine, 8>::new(RecordingLine::default(), &StripConfig::new(0));
        assert!(matches!(result, Err(StripError::Config(ConfigError::NoLeds))));

        let config = StripConfig::new(4).with_mode("GRBX");
        let result = Strip::<RecordingLine, 8>::new(RecordingLine::default(), &config);
        assert!(matches!(result, Err(StripError::Config(ConfigError::InvalidMode))));
    }

    #[test]
    fn test_new_reports_line_error() {
        let line = RecordingLine {
            reject_profile: true,
            ..RecordingLine::default()
        };
        let result = Strip::<RecordingLine, 8>::new(line, &StripConfig::new(4));
        assert!(matches!(result, Err(StripError::Line(LineFault))));
    }

    #[test]
    fn test_profile_follows_mode() {
        let rgb = strip(4, "GRB");
        assert_eq!(rgb.transmitter().profile().protocol, Protocol::Ws2812);

        let rgbw = strip(4, "GRBW");
        assert_eq!(rgbw.transmitter().profile().protocol, Protocol::Sk6812);
        assert_eq!(
            rgbw.transmitter().line().profile.map(|profile| profile.protocol),
            Some(Protocol::Sk6812)
        );
    }

    #[test]
    fn test_show_sends_words_then_latch() {
        let mut strip = strip(4, "GRB");
        strip.buffer_mut().set_pixel(0, RED).unwrap();
        strip.buffer_mut().set_pixel(3, GREEN).unwrap();
        strip.show().unwrap();

        let line = strip.transmitter().line();
        assert_eq!(line.symbols.len(), 4 * 24 + 1);
        assert_eq!(line.words(WordWidth::Rgb), [0x0000_FF00, 0, 0, 0x00FF_0000]);
        assert_eq!(
            line.symbols.last(),
            Some(&Symbol::Latch(Duration::from_micros(100)))
        );
    }

    #[test]
    fn test_show_latches_with_zero_delay() {
        let config = StripConfig::new(2).with_reset_delay(Duration::from_micros(0));
        let mut strip = Strip::<RecordingLine, 8>::new(RecordingLine::default(), &config).unwrap();
        strip.show().unwrap();
        assert_eq!(
            strip.transmitter().line().latches(),
            [Symbol::Latch(Duration::from_micros(0))]
        );
    }

    #[test]
    fn test_failed_show_keeps_buffer() {
        let config = StripConfig::new(3);
        let mut strip =
            Strip::<RecordingLine, 8>::new(RecordingLine::failing_after(40), &config).unwrap();
        strip.buffer_mut().fill(RED);
        let words = strip.buffer().words().to_vec();

        assert_eq!(strip.show(), Err(LineFault));
        assert!(strip.transmitter().line().latches().is_empty());
        assert_eq!(strip.buffer().words(), words.as_slice());
    }

    #[test]
    fn test_with_profile_rejects_width_mismatch() {
        let buffer = PixelBuffer::<8>::new(&StripConfig::new(4).with_mode("GRB")).unwrap();
        let result = Strip::with_profile(RecordingLine::default(), buffer, TimingProfile::SK6812);
        assert!(matches!(
            result,
            Err(StripError::Config(ConfigError::ProfileMismatch))
        ));

        let buffer = PixelBuffer::<8>::new(&StripConfig::new(4).with_mode("GRB")).unwrap();
        let strip =
            Strip::with_profile(RecordingLine::default(), buffer, TimingProfile::WS2812).unwrap();
        assert_eq!(strip.frame_duration(), Duration::from_micros(220));
    }

    #[test]
    fn test_frame_duration() {
        let strip = strip(4, "GRB");
        assert_eq!(strip.frame_duration(), Duration::from_micros(220));
    }

    #[test]
    fn test_smart_leds_write() {
        let mut strip = strip(3, "GRB");
        strip.buffer_mut().fill(GREEN);
        strip.write([RED, RED]).unwrap();

        let (buffer, line) = strip.release();
        let red = buffer.pack(RED);
        let green = buffer.pack(GREEN);
        assert_eq!(buffer.words(), &[red, red, green]);
        assert_eq!(line.words(WordWidth::Rgb), [red, red, green]);
        assert_eq!(line.latches().len(), 1);
    }

    #[test]
    fn test_smart_leds_write_ignores_extra_colors() {
        let mut strip = strip(2, "RGB");
        strip.write([RED; 5]).unwrap();
        assert_eq!(strip.transmitter().line().words(WordWidth::Rgb).len(), 2);
    }

    #[test]
    fn test_word_line_latch_holds() {
        let delay = Duration::from_micros(500);
        let config = StripConfig::new(2).with_mode("RGBW").with_reset_delay(delay);
        let mut strip = Strip::<WordLine, 8>::new(WordLine::default(), &config).unwrap();
        strip.buffer_mut().fill((1, 2, 3, 4));

        let start = Instant::now();
        strip.show().unwrap();
        assert!(Instant::now() - start >= delay);

        let line = strip.transmitter().line();
        assert_eq!(line.latched, 1);
        assert_eq!(
            line.words,
            [(0x0102_0304, WordWidth::Rgbw), (0x0102_0304, WordWidth::Rgbw)]
        );
    }

    #[test]
    fn test_shared_strip_update_and_show() {
        let shared = SharedStrip::new(strip(2, "GRB"));
        shared
            .update(|buffer| buffer.set_pixel(1, RED))
            .unwrap()
            .unwrap();
        shared.show().unwrap();

        let strip = shared.into_inner();
        assert_eq!(
            strip.transmitter().line().words(WordWidth::Rgb),
            [0, 0x0000_FF00]
        );
    }

    #[test]
    fn test_shared_strip_refuses_nested_show() {
        let shared = SharedStrip::new(strip(2, "GRB"));
        let nested = shared.update(|_| shared.show()).unwrap();
        assert_eq!(nested, Err(ShowError::Busy));
        assert!(shared.into_inner().transmitter().line().symbols.is_empty());
    }

    #[test]
    fn test_shared_strip_refuses_nested_update() {
        let shared = SharedStrip::new(strip(2, "GRB"));
        let nested = shared
            .update(|_| shared.update(|buffer| buffer.fill(RED)))
            .unwrap();
        assert_eq!(nested, Err(ShowError::Busy));
        assert_eq!(shared.into_inner().buffer().words(), &[0, 0]);
    }

    #[test]
    fn test_shared_strip_reports_line_errors() {
        let strip =
            Strip::<RecordingLine, 8>::new(RecordingLine::failing_after(0), &StripConfig::new(1))
                .unwrap();
        let shared = SharedStrip::new(strip);
        assert_eq!(shared.show(), Err(ShowError::Io(LineFault)));
    }
}
