use crate::ui::icon::{Icon, icons};
use leptos::prelude::*;

/// One image in a [`Lightbox`] gallery
#[derive(Clone, PartialEq)]
pub struct LightboxImage {
    pub src: String,
    pub alt: String,
    pub caption: Option<String>,
}

impl LightboxImage {
    pub fn new(src: impl Into<String>, alt: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            alt: alt.into(),
            caption: None,
        }
    }

    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }
}

/// Thumbnail grid that expands into a full-screen overlay with wrapping
/// prev/next navigation. The selected index is local state; closing the
/// overlay resets it.
#[component]
pub fn Lightbox(
    /// Images shown as thumbnails
    images: Vec<LightboxImage>,
    /// CSS classes for the thumbnail grid
    #[prop(default = "grid grid-cols-2 md:grid-cols-3 gap-4")]
    grid_class: &'static str,
) -> impl IntoView {
    let selected = RwSignal::new(None::<usize>);
    let count = images.len();
    let store = StoredValue::new(images);

    // Close on Escape key
    #[cfg(not(feature = "ssr"))]
    {
        use leptos::ev::keydown;

        let handle_keydown = window_event_listener(keydown, move |ev| {
            if selected.with_untracked(|s| s.is_none()) {
                return;
            }
            match ev.key().as_str() {
                "Escape" => selected.set(None),
                "ArrowLeft" => selected.update(|s| *s = s.map(|i| prev_index(i, count))),
                "ArrowRight" => selected.update(|s| *s = s.map(|i| next_index(i, count))),
                _ => {}
            }
        });

        on_cleanup(move || drop(handle_keydown));
    }

    view! {
        <div class=grid_class>
            {store.get_value().into_iter().enumerate().map(|(index, image)| {
                let label = format!("Open {}", image.alt);
                view! {
                    <button
                        class="rounded-lg overflow-hidden border border-theme hover:border-accent-primary/50 transition-colors"
                        on:click=move |_| selected.set(Some(index))
                        aria-label=label
                    >
                        <img src=image.src class="w-full h-auto" alt=image.alt/>
                    </button>
                }
            }).collect_view()}
        </div>

        {move || selected.get().map(|index| {
            let image = store.with_value(|images| images[index].clone());
            view! {
                <div
                    class="fixed inset-0 z-50 flex items-center justify-center bg-black/80"
                    on:click=move |_| selected.set(None)
                >
                    <button
                        class="absolute top-4 right-4 p-2 text-white/70 hover:text-white transition-colors"
                        on:click=move |e| {
                            e.stop_propagation();
                            selected.set(None);
                        }
                        aria-label="Close gallery"
                    >
                        <Icon name=icons::X class="w-6 h-6"/>
                    </button>

                    <button
                        class="absolute left-4 p-2 text-white/70 hover:text-white transition-colors"
                        on:click=move |e| {
                            e.stop_propagation();
                            selected.set(Some(prev_index(index, count)));
                        }
                        aria-label="Previous image"
                    >
                        <Icon name=icons::CHEVRON_LEFT class="w-8 h-8"/>
                    </button>

                    <figure
                        class="max-w-4xl max-h-[85vh] px-16"
                        on:click=move |e| e.stop_propagation()
                    >
                        <img
                            src=image.src
                            alt=image.alt
                            class="max-h-[75vh] w-auto mx-auto rounded-lg shadow-2xl"
                        />
                        {image.caption.map(|caption| view! {
                            <figcaption class="mt-3 text-center text-sm text-white/80">
                                {caption}
                            </figcaption>
                        })}
                    </figure>

                    <button
                        class="absolute right-4 p-2 text-white/70 hover:text-white transition-colors"
                        on:click=move |e| {
                            e.stop_propagation();
                            selected.set(Some(next_index(index, count)));
                        }
                        aria-label="Next image"
                    >
                        <Icon name=icons::CHEVRON_RIGHT class="w-8 h-8"/>
                    </button>

                    <div class="absolute bottom-4 left-1/2 -translate-x-1/2 text-sm text-white/70">
                        {format!("{} / {}", index + 1, count)}
                    </div>
                </div>
            }
        })}
    }
}

fn prev_index(index: usize, count: usize) -> usize {
    if index == 0 { count - 1 } else { index - 1 }
}

fn next_index(index: usize, count: usize) -> usize {
    (index + 1) % count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigation_wraps_both_ways() {
        assert_eq!(prev_index(0, 5), 4);
        assert_eq!(prev_index(3, 5), 2);
        assert_eq!(next_index(4, 5), 0);
        assert_eq!(next_index(2, 5), 3);
    }
}
