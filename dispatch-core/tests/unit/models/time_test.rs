use super::*;

parameterized_test! {can_format_time, (minutes, expected), {
    assert_eq!(format_time(minutes), expected);
}}

can_format_time! {
    case01_midnight: (0., "12:00 AM"),
    case02_morning: (485., "8:05 AM"),
    case03_noon: (720., "12:00 PM"),
    case04_afternoon: (810.5, "1:30 PM"),
    case05_end_of_day: (END_OF_DAY, "11:59 PM"),
    case06_next_day: (1445., "12:05 AM"),
}
