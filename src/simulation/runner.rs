//! The simulation loop: render, step, swap, repeat until nothing changes

use super::{Pacer, Renderer, SimulationReport};
use crate::game_of_life::{Grid, Rule, WorldBuffers};
use anyhow::Result;
use tracing::{debug, info};

/// Lifecycle of a [`Simulation`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimulationState {
    /// Generation 0 is loaded but nothing has been drawn yet
    Initializing,
    /// At least one more generation has to be computed
    Stepping,
    /// The last step changed nothing and the final world has been drawn
    Converged,
}

/// Double-buffered, single-threaded simulation of one world.
///
/// Convergence means a step produced a world identical to its input.
/// Oscillators never converge; such runs only end when the process does.
pub struct Simulation<R: Renderer, P: Pacer> {
    buffers: WorldBuffers,
    rule: Rule,
    renderer: R,
    pacer: P,
    state: SimulationState,
    generation: u64,
    changed: bool,
    steps: u64,
    initial_living_cells: usize,
}

impl<R: Renderer, P: Pacer> Simulation<R, P> {
    pub fn new(initial: Grid, rule: Rule, renderer: R, pacer: P) -> Self {
        let initial_living_cells = initial.living_count();
        Self {
            buffers: WorldBuffers::new(initial),
            rule,
            renderer,
            pacer,
            state: SimulationState::Initializing,
            generation: 0,
            changed: false,
            steps: 0,
            initial_living_cells,
        }
    }

    pub fn state(&self) -> SimulationState {
        self.state
    }

    /// Number of the generation currently held in the current buffer
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn current(&self) -> &Grid {
        self.buffers.current()
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Advance the state machine by one transition.
    ///
    /// Initializing moves to Stepping; each Stepping tick draws the current
    /// world, computes the next one and pauses, unless the previous step
    /// changed nothing, in which case the final world is drawn and the
    /// simulation converges. Converged is terminal.
    pub fn tick(&mut self) -> Result<SimulationState> {
        match self.state {
            SimulationState::Initializing => {
                let size = self.buffers.current().size();
                self.renderer.prepare(size)?;
                self.generation = 1;
                self.changed = true;
                self.state = SimulationState::Stepping;
                info!(rule = %self.rule, living = self.initial_living_cells, "simulation started");
            }
            SimulationState::Stepping if self.changed => {
                self.renderer.render(self.buffers.current(), self.generation)?;

                self.changed = self.buffers.advance(self.rule);
                self.generation += 1;
                self.steps += 1;
                debug!(
                    generation = self.generation,
                    changed = self.changed,
                    living = self.current().living_count(),
                    "generation computed"
                );

                self.pacer.pause();
            }
            SimulationState::Stepping => {
                self.renderer.render(self.buffers.current(), self.generation)?;
                self.renderer.finish()?;
                self.state = SimulationState::Converged;
                info!(generation = self.generation, steps = self.steps, "simulation converged");
            }
            SimulationState::Converged => {}
        }

        Ok(self.state)
    }

    /// Tick until the world converges
    pub fn run(&mut self) -> Result<SimulationReport> {
        while self.tick()? != SimulationState::Converged {}
        Ok(self.report())
    }

    pub fn report(&self) -> SimulationReport {
        SimulationReport {
            rule: self.rule,
            world_size: self.current().size(),
            generations: self.generation,
            steps: self.steps,
            initial_living_cells: self.initial_living_cells,
            final_living_cells: self.current().living_count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_of_life::CellState::{Alive as A, Dead as D};
    use crate::simulation::NoDelay;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Default)]
    struct RecordingRenderer {
        prepared: Option<usize>,
        frames: Vec<(u64, Grid)>,
        finished: bool,
    }

    impl Renderer for RecordingRenderer {
        fn prepare(&mut self, size: usize) -> Result<()> {
            self.prepared = Some(size);
            Ok(())
        }

        fn render(&mut self, grid: &Grid, generation: u64) -> Result<()> {
            self.frames.push((generation, grid.clone()));
            Ok(())
        }

        fn finish(&mut self) -> Result<()> {
            self.finished = true;
            Ok(())
        }
    }

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Event {
        Prepare,
        Render(u64, usize),
        Pause,
        Finish,
    }

    type EventLog = Rc<RefCell<Vec<Event>>>;

    struct LoggingRenderer(EventLog);

    impl Renderer for LoggingRenderer {
        fn prepare(&mut self, _size: usize) -> Result<()> {
            self.0.borrow_mut().push(Event::Prepare);
            Ok(())
        }

        fn render(&mut self, grid: &Grid, generation: u64) -> Result<()> {
            self.0.borrow_mut().push(Event::Render(generation, grid.living_count()));
            Ok(())
        }

        fn finish(&mut self) -> Result<()> {
            self.0.borrow_mut().push(Event::Finish);
            Ok(())
        }
    }

    struct LoggingPacer(EventLog);

    impl Pacer for LoggingPacer {
        fn pause(&mut self) {
            self.0.borrow_mut().push(Event::Pause);
        }
    }

    fn simulation(initial: Grid, rule: Rule) -> Simulation<RecordingRenderer, NoDelay> {
        Simulation::new(initial, rule, RecordingRenderer::default(), NoDelay)
    }

    #[test]
    fn test_all_dead_world_converges_after_one_step() {
        let mut sim = simulation(Grid::new(5), Rule::Literal);
        let report = sim.run().unwrap();

        assert_eq!(sim.state(), SimulationState::Converged);
        assert_eq!(report.steps, 1);
        assert_eq!(report.generations, 2);

        let renderer = sim.renderer();
        assert_eq!(renderer.prepared, Some(5));
        assert!(renderer.finished);
        let generations: Vec<u64> = renderer.frames.iter().map(|(g, _)| *g).collect();
        assert_eq!(generations, vec![1, 2]);
    }

    #[test]
    fn test_lone_cell_dies_then_converges() {
        let mut grid = Grid::new(3);
        grid.set(1, 1, A).unwrap();

        let mut sim = simulation(grid.clone(), Rule::Literal);
        let report = sim.run().unwrap();

        assert_eq!(report.steps, 2);
        assert_eq!(report.generations, 3);
        assert_eq!(report.initial_living_cells, 1);
        assert_eq!(report.final_living_cells, 0);

        let frames = &sim.renderer().frames;
        assert_eq!(frames.len(), 3);
        assert_eq!(frames[0].1, grid);
        assert!(frames[1].1.is_empty());
        // The converged world is drawn once more
        assert_eq!(frames[1].1, frames[2].1);
    }

    #[test]
    fn test_still_life_converges_under_conway() {
        let block = Grid::from_rows(vec![
            vec![D, D, D, D],
            vec![D, A, A, D],
            vec![D, A, A, D],
            vec![D, D, D, D],
        ]).unwrap();

        let mut sim = simulation(block.clone(), Rule::Conway);
        let report = sim.run().unwrap();

        assert_eq!(report.steps, 1);
        assert_eq!(sim.current(), &block);
        assert_eq!(report.final_living_cells, 4);
    }

    #[test]
    fn test_oscillator_never_converges() {
        let blinker = Grid::from_rows(vec![
            vec![D, D, D, D, D],
            vec![D, D, A, D, D],
            vec![D, D, A, D, D],
            vec![D, D, A, D, D],
            vec![D, D, D, D, D],
        ]).unwrap();

        let mut sim = simulation(blinker.clone(), Rule::Conway);
        // One tick to start, then fifty steps
        for _ in 0..51 {
            assert_eq!(sim.tick().unwrap(), SimulationState::Stepping);
        }

        assert!(!sim.renderer().finished);
        assert_eq!(sim.generation(), 51);
        // Even number of steps brings the blinker back to its start phase
        assert_eq!(sim.current(), &blinker);
    }

    #[test]
    fn test_state_machine_transitions() {
        let mut sim = simulation(Grid::new(2), Rule::Conway);
        assert_eq!(sim.state(), SimulationState::Initializing);
        assert_eq!(sim.generation(), 0);
        assert!(sim.renderer().frames.is_empty());

        assert_eq!(sim.tick().unwrap(), SimulationState::Stepping);
        assert_eq!(sim.generation(), 1);
        assert!(sim.renderer().frames.is_empty());

        assert_eq!(sim.tick().unwrap(), SimulationState::Stepping);
        assert_eq!(sim.tick().unwrap(), SimulationState::Converged);

        let frames = sim.renderer().frames.len();
        assert_eq!(sim.tick().unwrap(), SimulationState::Converged);
        assert_eq!(sim.renderer().frames.len(), frames);
    }

    #[test]
    fn test_each_tick_renders_then_steps_then_pauses() {
        let mut grid = Grid::new(3);
        grid.set(0, 0, A).unwrap();

        let log = EventLog::default();
        let mut sim = Simulation::new(
            grid,
            Rule::Literal,
            LoggingRenderer(log.clone()),
            LoggingPacer(log.clone()),
        );

        sim.tick().unwrap();
        assert_eq!(*log.borrow(), vec![Event::Prepare]);

        // The frame shows the world before the step; the pause comes after it
        sim.tick().unwrap();
        assert_eq!(*log.borrow(), vec![Event::Prepare, Event::Render(1, 1), Event::Pause]);
        assert_eq!(sim.generation(), 2);
        assert!(sim.current().is_empty());

        let report = sim.run().unwrap();
        assert_eq!(report.steps, 2);
        assert_eq!(
            *log.borrow(),
            vec![
                Event::Prepare,
                Event::Render(1, 1),
                Event::Pause,
                Event::Render(2, 0),
                Event::Pause,
                Event::Render(3, 0),
                Event::Finish,
            ]
        );
    }
}
