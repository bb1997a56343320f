#[cfg(test)]
#[path = "../../tests/unit/commands/schedule_test.rs"]
mod schedule_test;

use super::*;

const AT_ARG_NAME: &str = "at";

pub fn get_schedule_app() -> Command {
    with_data_args(Command::new("schedule").about("Prints status of every vehicle and its shipments at given time"))
        .arg(
            Arg::new(AT_ARG_NAME)
                .help("Specifies time in \"H:MM AM/PM\" format, default is the end of the day")
                .short('t')
                .long(AT_ARG_NAME)
                .required(false),
        )
}

pub fn run_schedule(matches: &ArgMatches) -> Result<(), String> {
    let mut context = create_context(matches)?;
    let time = parse_time_value(matches, AT_ARG_NAME, "schedule time")?.unwrap_or(END_OF_DAY);

    let lines = context.fleet.status_at_time(time).iter().flat_map(|report| report.lines()).collect::<Vec<_>>();
    context.fleet.reset();

    write_lines(create_out_writer(matches)?, lines.as_slice())
}
