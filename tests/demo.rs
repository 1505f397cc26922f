use patternbook::{run_demo, BufferSurface, FizzBuzz, Settings};

/// Тест проверяет полный сценарий загрузки.
#[test]
fn test_demo_scenario() {
    let mut surface = BufferSurface::new();
    let report = run_demo(&Settings::default(), &mut surface).unwrap();

    assert_eq!(surface.inner_html(), "<h1>JS Starter</h1>");
    assert_eq!(surface.updates(), 1);

    assert_eq!(report.counter, vec![1, 2, 3]);
    assert_eq!(report.fruits, vec!["apple", "mange", "pain", "lait"]);

    assert!(report.config_is_shared());
    assert_eq!(report.first_config.size, 8);
    assert_eq!(report.first_config.number, 5);

    let who: Vec<&str> = report.deliveries.iter().map(|d| d.subscriber).collect();
    assert_eq!(who, vec!["first", "second", "hover", "first", "hover"]);

    assert_eq!(report.added, Some(8));
    assert_eq!(report.subtracted, Some(2));
    assert_eq!(report.multiplied, None);

    let mut sorted = report.shuffled.clone();
    sorted.sort_unstable();
    assert_eq!(sorted, (1..=10).collect::<Vec<_>>());

    assert_eq!(report.color.len(), 7);
    assert_eq!(report.fizz_buzz.len(), 6);
    assert_eq!(report.fizz_buzz[2], FizzBuzz::Fizz);
    assert_eq!(report.fizz_buzz[4], FizzBuzz::Buzz);
}

/// Тест проверяет, что заголовок и дефолты берутся из настроек.
#[test]
fn test_demo_uses_settings() {
    let mut settings = Settings::default();
    settings.heading = "Design Patterns".into();
    settings.defaults.number = 42;

    let mut surface = BufferSurface::new();
    let report = run_demo(&settings, &mut surface).unwrap();

    assert_eq!(surface.inner_html(), "<h1>Design Patterns</h1>");
    assert_eq!(report.second_config.number, 42);
}
