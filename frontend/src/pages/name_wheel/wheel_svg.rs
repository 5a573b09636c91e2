use std::rc::Rc;

use shared::wheel_geometry::{Slice, WheelLayout};
use yew::prelude::*;

/// Timing curve for the spin. Overshoots slightly before settling.
pub const SPIN_EASING: &str = "cubic-bezier(0.34, 1.56, 0.64, 1)";

#[derive(Properties, PartialEq)]
pub struct WheelSvgProps {
    pub slices: Rc<Vec<Slice>>,
    pub rotation: f64,
    pub duration_ms: u32,
}

pub fn wheel_transform_style(rotation: f64, duration_ms: u32) -> String {
    format!(
        "transition: transform {}ms {}; transform-origin: 50% 50%; transform: rotate({}deg);",
        duration_ms, SPIN_EASING, rotation
    )
}

#[function_component(WheelSvg)]
pub fn wheel_svg(props: &WheelSvgProps) -> Html {
    let layout = WheelLayout::default();
    let size = layout.view_size();
    let view_box = format!("0 0 {} {}", size, size);

    html! {
        <div class="relative mx-auto w-full max-w-sm aspect-square">
            // Fixed pointer at 12 o'clock
            <div class="absolute left-1/2 -top-1 z-10 -translate-x-1/2 w-0 h-0 border-l-[12px] border-r-[12px] border-t-[20px] border-l-transparent border-r-transparent border-t-gray-900 dark:border-t-white" aria-hidden="true"></div>
            <svg
                id="wheel-svg"
                class="w-full h-full drop-shadow-lg"
                viewBox={view_box}
                style={wheel_transform_style(props.rotation, props.duration_ms)}
                role="img"
                aria-label="Name picker wheel"
            >
                if props.slices.is_empty() {
                    <>
                        <circle
                            cx={layout.center.x.to_string()}
                            cy={layout.center.y.to_string()}
                            r={layout.radius.to_string()}
                            class="fill-gray-200 dark:fill-gray-700"
                        />
                        <text
                            x={layout.center.x.to_string()}
                            y={layout.center.y.to_string()}
                            text-anchor="middle"
                            dominant-baseline="middle"
                            class="fill-gray-500 text-[10px]"
                        >
                            {"Add names to spin"}
                        </text>
                    </>
                } else {
                    { for props.slices.iter().map(|slice| render_slice(&layout, slice)) }
                }
            </svg>
        </div>
    }
}

fn render_slice(layout: &WheelLayout, slice: &Slice) -> Html {
    let label = layout.label_for(slice);
    let x = label.anchor.x.to_string();
    let y = label.anchor.y.to_string();
    let transform = format!("rotate({} {} {})", label.rotation, x, y);

    html! {
        <g key={slice.entrant.clone()}>
            <path
                d={layout.slice_path(slice)}
                fill={slice.color()}
                stroke="white"
                stroke-width="2"
                class="wheel-segment-path"
            />
            <text
                x={x.clone()}
                y={y.clone()}
                text-anchor="middle"
                dominant-baseline="middle"
                transform={transform}
                class="wheel-segment-text fill-white text-[9px] font-semibold select-none"
            >
                {slice.entrant.clone()}
            </text>
        </g>
    }
}
