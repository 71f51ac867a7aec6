use toboggan::{survey, Grid, SLOPES};

#[cfg(feature = "with_dhat")]
use dhat::{Dhat, DhatAlloc};

#[cfg(feature = "with_dhat")]
#[global_allocator]
static ALLOCATOR: DhatAlloc = DhatAlloc;

fn main() -> Result<(), Box<dyn std::error::Error + 'static>> {
    #[cfg(feature = "with_dhat")]
    let _dhat = Dhat::start_heap_profiling();

    toboggan::logging::init();

    let stdin = std::io::stdin();
    let grid = Grid::read(stdin.lock())?;

    tracing::info!(width = grid.width(), height = grid.height(), "read map");

    let report = survey(&grid, &SLOPES)?;

    println!("{}", report);

    Ok(())
}
