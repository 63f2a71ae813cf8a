pub fn setup_logger() {
    use std::io::Write;

    fn tn() -> String {
        std::thread::current().name().unwrap_or("unknown").to_owned()
    }

    let mut builder = env_logger::Builder::new();
    builder
        .format(|buf, record| {
            writeln!(
                buf,
                "{:05} {:20} {:10} {}",
                record.level(),
                tn(),
                record
                    .module_path()
                    .and_then(|path| path.split("::").last())
                    .unwrap_or("unknown"),
                record.args()
            )
        })
        .filter(None, log::LevelFilter::Info);

    if let Ok(env) = std::env::var("RUST_LOG") {
        builder.parse_filters(&env);
    }

    let _r = builder.try_init();
}

/// Sorted `Vec<i64>` with runs of duplicates, drawn from `rng`.
#[allow(dead_code)]
pub fn sorted_with_dups(rng: &mut impl rand::Rng, len: usize) -> Vec<i64> {
    let mut v: Vec<i64> =
        (0..len).map(|_| rng.random_range(-50..50)).collect();
    v.sort_unstable();
    v
}
