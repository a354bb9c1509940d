use std::io;

mod options;

use termlife::{GameOfLife, Simulation, Sleep};

fn main() -> io::Result<()> {
    env_logger::init();

    let args = match options::Args::from_env() {
        Ok(Some(args)) => args,
        Ok(None) => return Ok(()),
        Err(err) => return Err(io::Error::new(io::ErrorKind::InvalidInput, err)),
    };
    let generations = args
        .generations()
        .map_err(|err| io::Error::new(io::ErrorKind::InvalidInput, err))?;
    let sleep = args
        .sleep()
        .map_err(|err| io::Error::new(io::ErrorKind::InvalidInput, err))?;

    log::info!(
        "starting simulation (delay: {:?}, threads: {})",
        sleep,
        if args.multithreading() {
            rayon::current_num_threads()
        } else {
            1
        }
    );

    let stdout = io::stdout().lock();
    let mut sim = Simulation::new(GameOfLife::new(), stdout, Sleep(sleep))
        .parallel(args.multithreading());
    sim.run(generations)
}
