use crate::{engine::GameOfLife, render::TerminalRenderer, stats::Recorder};
use std::{
    io::{self, Write},
    thread,
    time::Duration,
};

/// Delay between two generations
pub const DEFAULT_DELAY: Duration = Duration::from_millis(100);

/// Paces the simulation, called once after each drawn generation
pub trait Tick {
    fn tick(&mut self);
}

/// Blocks the thread for a fixed interval
#[derive(Debug, Clone, Copy)]
pub struct Sleep(pub Duration);

impl Default for Sleep {
    fn default() -> Self {
        Self(DEFAULT_DELAY)
    }
}

impl Tick for Sleep {
    fn tick(&mut self) {
        thread::sleep(self.0);
    }
}

/// Drives a [`GameOfLife`] onto a terminal, one generation per tick
pub struct Simulation<W: Write, T: Tick> {
    game: GameOfLife,
    renderer: TerminalRenderer<W>,
    tick: T,
    stats: Recorder,
    parallel: bool,
}

impl<W: Write, T: Tick> Simulation<W, T> {
    pub fn new(game: GameOfLife, out: W, tick: T) -> Self {
        let stats = Recorder::new(game.alive_count());
        Self {
            game,
            renderer: TerminalRenderer::new(out),
            tick,
            stats,
            parallel: false,
        }
    }

    /// Computes generations on the rayon thread pool
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    #[inline]
    pub fn game(&self) -> &GameOfLife {
        &self.game
    }

    /// Resizes the terminal and draws the current generation
    pub fn start(&mut self) -> io::Result<()> {
        self.renderer.init()?;
        self.renderer.draw(self.game.grid())
    }

    /// Computes, draws and waits out one generation
    ///
    /// Returns whether the simulation restarted from the seed
    pub fn advance(&mut self) -> io::Result<bool> {
        let restarted = if self.parallel {
            self.game.next_generation_parallel()
        } else {
            self.game.next_generation()
        };
        self.stats.record(self.game.alive_count(), restarted);
        if self.stats.has_report() {
            log::info!("{}", self.stats.report());
        }

        self.renderer.draw(self.game.grid())?;
        self.tick.tick();
        Ok(restarted)
    }

    /// Starts and advances `limit` generations, or forever with `None`
    ///
    /// Stops at the first write error.
    pub fn run(&mut self, limit: Option<usize>) -> io::Result<()> {
        self.start()?;
        match limit {
            Some(gens) => {
                for _ in 0..gens {
                    self.advance()?;
                }
            }
            None => loop {
                self.advance()?;
            },
        }
        log::info!(
            "stopped after {} generations ({} restarts)",
            self.stats.generations(),
            self.stats.restarts()
        );
        Ok(())
    }

    pub fn into_output(self) -> W {
        self.renderer.into_inner()
    }
}
