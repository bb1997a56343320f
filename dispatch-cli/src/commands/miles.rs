#[cfg(test)]
#[path = "../../tests/unit/commands/miles_test.rs"]
mod miles_test;

use super::*;

pub fn get_miles_app() -> Command {
    with_data_args(Command::new("miles").about("Prints total length of today's routes"))
}

pub fn run_miles(matches: &ArgMatches) -> Result<(), String> {
    let context = create_context(matches)?;
    let total = (context.fleet.total_route_length() * 100.).round() / 100.;

    write_lines(create_out_writer(matches)?, &[format!("Today's route is {total} miles long.")])
}
