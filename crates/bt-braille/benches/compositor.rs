use bt_braille::compositor::Compositor;
use bt_core::frame::FrameBuffer;
use bt_core::palette::{COLORAMA, Palette};
use criterion::{Criterion, black_box, criterion_group, criterion_main};

fn gradient(width: u32, height: u32) -> FrameBuffer {
    let mut frame = FrameBuffer::new(width, height);
    for y in 0..height {
        for x in 0..width {
            let v = ((x + y) * 255 / (width + height)) as u8;
            frame.set_pixel(x, y, (v, 255 - v, v / 2, 255));
        }
    }
    frame
}

fn bench_compositor(c: &mut Criterion) {
    let frame = gradient(200, 160);

    c.bench_function("render 200x160 grayscale", |b| {
        let comp = Compositor::new(Palette::NoStyle, 128);
        b.iter(|| comp.render(black_box(&frame)));
    });

    c.bench_function("render 200x160 ansi16", |b| {
        let comp = Compositor::new(Palette::Discrete(&COLORAMA), 128);
        b.iter(|| comp.render(black_box(&frame)));
    });

    c.bench_function("render 200x160 truecolor", |b| {
        let comp = Compositor::new(Palette::DirectColor, 128);
        b.iter(|| comp.render(black_box(&frame)).to_string());
    });
}

criterion_group!(benches, bench_compositor);
criterion_main!(benches);
