use chart_form_wasm::domain::{ChartRequest, FormInput, LocalMoment};
use quickcheck_macros::quickcheck;

fn moment(year: u16, month: u8, day: u8, hour: u8, minute: u8) -> LocalMoment {
    LocalMoment::new(
        1 + (year % 9999) as i32,
        1 + (month % 12) as u32,
        1 + (day % 28) as u32,
        (hour % 24) as u32,
        (minute % 60) as u32,
    )
}

#[quickcheck]
fn defaults_have_picker_formats(year: u16, month: u8, day: u8, hour: u8, minute: u8) -> bool {
    let input = FormInput::from_moment(moment(year, month, day, hour, minute));
    input.date.len() == 10 && input.time.len() == 5 && input.time.matches(':').count() == 1
}

#[quickcheck]
fn defaults_parse_back_to_the_same_moment(year: u16, month: u8, day: u8, hour: u8, minute: u8) -> bool {
    let m = moment(year, month, day, hour, minute);
    ChartRequest::from_input(&FormInput::from_moment(m)) == Ok(ChartRequest::from(m))
}
