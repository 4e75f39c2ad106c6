use std::error::Error;
use gnufig::Figure;

fn main() -> Result<(), Box<dyn Error>> {
    let heights = [12.0, 25.0, 41.0, 33.0, 18.0, 7.0];

    let mut fig = Figure::new();
    fig.ylabel("count");
    fig.style_histogram().clustered_with_gap(1.0);
    fig.style_fill().solid().intensity(0.6).border_show();
    fig.draw_histogram(heights).label("samples");
    fig.save("target/histogram.svg")?;
    Ok(())
}
