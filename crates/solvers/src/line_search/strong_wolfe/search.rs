use log::{debug, trace, warn};

use wolfe_core::{DifferentiableFunction, Observer};

use super::{
    Action, Config, DELTA_MAX, Error, Event, MAX_UPDATE_ITERATIONS, Origin, Point, Solution,
    Status, bracket::Bracket, evaluate::Probe, zoom::zoom,
};

/// Core Strong Wolfe bracketing loop.
///
/// Starting from `alpha0`, each iteration evaluates a trial step and either
/// accepts it, hands a bracket to [`zoom`], or extrapolates to a larger step.
/// An infinite value halves the trial step before the checks run; the
/// halvings share the iteration budget. The previous trial keeps its finite
/// value, so a halved step is still compared against it before acceptance.
pub(super) fn search<F, Obs>(
    function: &F,
    origin: &Origin,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    F: DifferentiableFunction,
    Obs: Observer<Event, Action>,
{
    let mut probe = Probe::new(function);
    let mut previous = Point::new(0.0, origin.value(), origin.slope());
    let mut alpha = config.alpha0();

    let mut iter = 1;
    while iter < MAX_UPDATE_ITERATIONS {
        probe.tick();

        let mut value = probe.value(alpha)?;
        while value.is_infinite() && iter < MAX_UPDATE_ITERATIONS {
            if (Event::Halved { iter, alpha, value }).stops(&mut observer) {
                return Ok(probe.finish(Status::StoppedByObserver, alpha, None));
            }
            alpha /= 2.0;
            value = probe.value(alpha)?;
            iter += 1;
        }
        if value.is_infinite() {
            warn!("halving exhausted {MAX_UPDATE_ITERATIONS} iterations, returning alpha = {alpha}");
            return Ok(probe.finish(Status::MaxIters, alpha, None));
        }

        let point = Point::new(alpha, value, probe.slope(alpha)?);
        trace!("bracketing {iter}: {point:?}");

        if (Event::Bracketing {
            iter,
            point,
            previous,
        })
        .stops(&mut observer)
        {
            return Ok(probe.finish_at(Status::StoppedByObserver, point));
        }

        if !config.sufficient_decrease(origin, &point) || (iter > 1 && point.value >= previous.value)
        {
            return zoom(
                &mut probe,
                origin,
                config,
                Bracket::new(previous, point),
                &mut observer,
            );
        }

        if config.curvature(origin, &point) {
            debug!("bracketing accepted alpha = {alpha} after {iter} iterations");
            return Ok(probe.finish_at(Status::Converged, point));
        }

        if point.slope >= 0.0 {
            return zoom(
                &mut probe,
                origin,
                config,
                Bracket::new(point, previous),
                &mut observer,
            );
        }

        alpha = (point.alpha + DELTA_MAX * (point.alpha - previous.alpha)).min(config.alpha_max());
        previous = point;
        iter += 1;
    }

    warn!("bracketing exhausted {MAX_UPDATE_ITERATIONS} iterations, returning alpha = {alpha}");
    Ok(probe.finish(Status::MaxIters, alpha, None))
}
