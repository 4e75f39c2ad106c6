use std::error::Error;
use gnufig::Figure;

fn main() -> Result<(), Box<dyn Error>> {
    let x: Vec<f64> = (0..=1000).map(|i| i as f64 / 100.0).collect();
    let sin: Vec<f64> = x.iter().map(|x| x.sin()).collect();
    let cos: Vec<f64> = x.iter().map(|x| x.cos()).collect();

    let mut fig = Figure::new();
    fig.palette("parula");
    fig.xlabel("x");
    fig.ylabel("f(x)");
    fig.xrange(0.0, 10.0);
    fig.draw_curve(&x, &sin).label("sin(x)").line_width(2.0);
    fig.draw_curve(&x, &cos).label("cos(x)").dash_type(2);
    fig.legend().at_top_right().frame_show();
    fig.grid().show();
    fig.save("target/trig.png")?;
    Ok(())
}
