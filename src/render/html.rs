//! Animated Chart.js page covering every sampled frame.

use std::fs;
use std::path::Path;

use serde_json::to_string;
use tracing::info;

use crate::config::PlotConfig;
use crate::error::Result;
use crate::frames::Animation;

/// Colours and dash patterns shared by every dataset on the page.
fn datasets(overlays: bool) -> String {
    let mut sets = vec![r#"{
                    label: 'u(x, t)',
                    data: points(animation.frames[0].displacement),
                    borderColor: '#1f77b4',
                    borderWidth: 2,
                    pointRadius: 0,
                    fill: false
                }"#
    .to_string()];

    if overlays {
        for (field, label, color) in [
            ("left", "reflected wave", "green"),
            ("right", "right-moving wave", "red"),
        ] {
            sets.push(format!(
                r#"{{
                    label: '{label}',
                    data: points(animation.frames[0].{field}),
                    borderColor: '{color}',
                    borderDash: [6, 4],
                    borderWidth: 1.5,
                    pointRadius: 0,
                    fill: false
                }}"#
            ));
        }
    }

    sets.join(", ")
}

/// Build a self-contained page that animates every frame with Chart.js.
/// `domain` fixes the horizontal axis regardless of where the samples fall.
pub fn generate_html(
    animation: &Animation,
    domain: (f64, f64),
    plot: &PlotConfig,
) -> Result<String> {
    let animation_json = to_string(animation)?;
    let (x_min, x_max) = domain;
    let overlays = plot.overlays;

    Ok(format!(
        r#"
<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <title>Semi-infinite string (c={speed})</title>
    <script src="https://cdn.jsdelivr.net/npm/chart.js"></script>
    <style>
        body {{ font-family: sans-serif; max-width: 1000px; margin: 20px auto; }}
        h1 {{ text-align: center; color: #2c3e50; }}
        .ctrl {{ text-align: center; margin: 15px 0; }}
        button {{ padding: 6px 12px; margin: 0 5px; cursor: pointer; }}
        canvas {{ width: 100% !important; height: 450px !important; }}
    </style>
</head>
<body>
    <h1>Semi-infinite string with a fixed end (c = {speed})</h1>
    <div class="ctrl">
        <button id="prev">← Previous</button>
        <button id="play">Play</button>
        <button id="pause">Pause</button>
        <button id="next">Next →</button>
        <button id="reset">Reset</button>
        <span id="timeLabel">t = 0.00</span>
    </div>
    <canvas id="waveChart"></canvas>

    <script>
        const animation = {animation_json};
        const overlays = {overlays};
        let currFrame = 0;
        let animId = null;

        function points(ys) {{
            return animation.x.map((x, i) => ({{ x: x, y: ys[i] }}));
        }}

        function yLabel(t) {{
            return 'u (x, ' + t.toFixed(2) + ')';
        }}

        const ctx = document.getElementById('waveChart').getContext('2d');
        const chart = new Chart(ctx, {{
            type: 'line',
            data: {{ datasets: [{datasets}] }},
            options: {{
                parsing: false,
                scales: {{
                    x: {{ type: 'linear', title: {{ display: true, text: 'x' }}, min: {x_min}, max: {x_max} }},
                    y: {{ title: {{ display: true, text: yLabel(animation.frames[0].t) }}, min: {y_min}, max: {y_max} }}
                }},
                plugins: {{ legend: {{ position: 'bottom' }} }},
                animation: {{ duration: 0 }}
            }}
        }});

        function update() {{
            const frame = animation.frames[currFrame];
            chart.data.datasets[0].data = points(frame.displacement);
            if (overlays) {{
                chart.data.datasets[1].data = points(frame.left);
                chart.data.datasets[2].data = points(frame.right);
            }}
            chart.options.scales.y.title.text = yLabel(frame.t);
            document.getElementById('timeLabel').textContent = 't = ' + frame.t.toFixed(2);
            chart.update();
        }}

        function animate() {{
            currFrame = (currFrame + 1) % animation.frames.length;
            update();
            animId = setTimeout(animate, 50);
        }}

        function stop() {{ clearTimeout(animId); animId = null; }}

        document.getElementById('play').addEventListener('click', () => animId || animate());
        document.getElementById('pause').addEventListener('click', stop);
        document.getElementById('reset').addEventListener('click', () => {{ stop(); currFrame = 0; update(); }});
        document.getElementById('next').addEventListener('click', () => {{
            if (currFrame < animation.frames.length - 1) {{ currFrame++; update(); }}
        }});
        document.getElementById('prev').addEventListener('click', () => {{
            if (currFrame > 0) {{ currFrame--; update(); }}
        }});

        update();
    </script>
</body>
</html>
        "#,
        speed = animation.speed,
        animation_json = animation_json,
        overlays = overlays,
        datasets = datasets(overlays),
        x_min = x_min,
        x_max = x_max,
        y_min = plot.y_min,
        y_max = plot.y_max,
    ))
}

pub fn write_html(
    path: impl AsRef<Path>,
    animation: &Animation,
    domain: (f64, f64),
    plot: &PlotConfig,
) -> Result<()> {
    let path = path.as_ref();
    let html = generate_html(animation, domain, plot)?;
    fs::write(path, html)?;
    info!("Generated: {}", path.display());
    Ok(())
}
