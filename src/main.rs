use chart_digitizer::prelude::*;

fn main() {
    // Demo stub: analyzes the built-in demo sketch and prints the table
    let shapes = demo_sketch();
    match analyze(&shapes) {
        Ok(recovery) => {
            for (color, points) in &recovery.groups {
                for point in points {
                    println!("{color}: ({:.1}, {:.1})", point[0], point[1]);
                }
            }
        }
        Err(err) => println!("no result: {err}"),
    }
}
