use std::error::Error;

use occgrid::types::OCCUPIED;
use occgrid::visualization::occupancy_grid_to_image;
use occgrid::{load_environment, ros_msg::occupancy_grid_msg};

fn main() -> Result<(), Box<dyn Error>> {
    let mut args = std::env::args();
    let _binary = args.next();
    let yaml_path = match args.next() {
        Some(path) => path,
        None => {
            eprintln!("usage: mapgen <environment.yaml> [preview.png]");
            return Ok(());
        }
    };
    let preview_path = args.next();

    let environment = load_environment(&yaml_path)?;
    let grid = environment.build_grid()?;

    let occupied = grid.data().iter().filter(|&&cell| cell == OCCUPIED).count();
    println!(
        "{}: {}x{} cells at {} m/cell, {} occupied of {}",
        yaml_path,
        grid.width(),
        grid.height(),
        grid.info().resolution(),
        occupied,
        grid.data().len()
    );

    let msg = occupancy_grid_msg(&grid, "map");
    println!("{}", serde_yaml::to_string(&msg.info)?);

    if let Some(path) = preview_path {
        occupancy_grid_to_image(&grid).save(&path)?;
        println!("wrote preview to {path}");
    }

    Ok(())
}
