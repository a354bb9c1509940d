use std::time::Duration;

use termlife::sim::DEFAULT_DELAY;

pub struct Args {
    matches: getopts::Matches,
}

impl Args {
    /// Parses the options, returning `Ok(None)` when only help was requested
    fn new<T: AsRef<str>>(args: &[T]) -> Result<Option<Self>, String> {
        let mut opts = getopts::Options::new();
        opts.optflag("", "help", "print this help menu");
        opts.optflag("t", "threads", "compute generations on all cores");
        opts.optopt(
            "s",
            "sleep",
            "the amount of time to sleep between generations",
            "MILLIS",
        );
        opts.optopt("g", "gens", "max number of generations", "COUNT");

        let matches = opts
            .parse(args.iter().map(T::as_ref))
            .map_err(|err| err.to_string())?;
        if matches.opt_present("help") {
            println!("{}", opts.usage("usage: termlife [options]"));
            return Ok(None);
        }

        let args = Self { matches };
        // surface malformed numbers now rather than mid-run
        args.generations()?;
        args.sleep()?;
        Ok(Some(args))
    }

    pub fn from_env() -> Result<Option<Self>, String> {
        let env = std::env::args().collect::<Vec<_>>();
        Self::new(&env[1..])
    }

    pub fn multithreading(&self) -> bool {
        self.matches.opt_present("threads")
    }

    /// `None` runs until the process is killed
    pub fn generations(&self) -> Result<Option<usize>, String> {
        self.matches
            .opt_get("gens")
            .map_err(|err| format!("invalid --gens: {err}"))
    }

    pub fn sleep(&self) -> Result<Duration, String> {
        let millis: Option<u64> = self
            .matches
            .opt_get("sleep")
            .map_err(|err| format!("invalid --sleep: {err}"))?;
        Ok(millis.map_or(DEFAULT_DELAY, Duration::from_millis))
    }
}
